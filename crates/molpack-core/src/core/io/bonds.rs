use crate::core::models::topology::Bond;
use crate::core::models::unit::AtomPool;
use crate::core::utils::geometry::distance;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

const HEADER: [&str; 6] = [
    "atom1",
    "atom2",
    "symbol1",
    "symbol2",
    "distance",
    "inter_unit",
];

#[derive(Debug, Error)]
pub enum BondsWriteError {
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bond {bond} references an atom outside the pool of {pool_size} atoms")]
    IndexOutOfRange { bond: Bond, pool_size: usize },
}

#[derive(Debug, Serialize)]
struct BondRecord<'a> {
    atom1: usize,
    atom2: usize,
    symbol1: &'a str,
    symbol2: &'a str,
    distance: String,
    inter_unit: bool,
}

/// Writes `bonds` as CSV with one row per bond and a header line.
///
/// Columns: `atom1,atom2,symbol1,symbol2,distance,inter_unit`. Distances use
/// three decimals to match the points file.
pub fn write_bonds_csv<W: Write>(
    bonds: &[Bond],
    pool: &AtomPool,
    writer: W,
) -> Result<(), BondsWriteError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let atoms = pool.atoms();

    for bond in bonds {
        let (Some(a), Some(b)) = (atoms.get(bond.atom1), atoms.get(bond.atom2)) else {
            return Err(BondsWriteError::IndexOutOfRange {
                bond: *bond,
                pool_size: atoms.len(),
            });
        };
        csv_writer.serialize(BondRecord {
            atom1: bond.atom1,
            atom2: bond.atom2,
            symbol1: &a.symbol,
            symbol2: &b.symbol,
            distance: format!("{:.3}", distance(a, b)),
            inter_unit: pool.unit_of(bond.atom1) != pool.unit_of(bond.atom2),
        })?;
    }

    if bonds.is_empty() {
        csv_writer.write_record(HEADER)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_bonds_csv_to_path<P: AsRef<Path>>(
    bonds: &[Bond],
    pool: &AtomPool,
    path: P,
) -> Result<(), BondsWriteError> {
    let file = std::fs::File::create(path)?;
    write_bonds_csv(bonds, pool, std::io::BufWriter::new(file))
}
