use super::traits::AtomFile;
use crate::core::elements::DEFAULT_ELECTRONEGATIVITY;
use crate::core::models::atom::Atom;
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Missing or invalid atom count header: '{0}'")]
    InvalidHeader(String),
    #[error("Expected {expected} atom records, found {found}")]
    AtomCountMismatch { expected: usize, found: usize },
    #[error("Malformed atom record on line {line}: '{content}'")]
    MalformedRecord { line: usize, content: String },
}

/// Standard XYZ format: atom count, a comment line, then `symbol x y z` records.
///
/// XYZ carries no electronegativity, so atoms read back receive the default value.
pub struct XyzFile;

impl AtomFile for XyzFile {
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Vec<Atom>, Self::Error> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.unwrap_or_default();
        let expected: usize = header
            .trim()
            .parse()
            .map_err(|_| XyzError::InvalidHeader(header.clone()))?;
        let _comment = lines.next().transpose()?;

        let mut atoms = Vec::with_capacity(expected);
        for (idx, line_res) in lines.enumerate() {
            let line = line_res?;
            if line.trim().is_empty() {
                continue;
            }
            let line_num = idx + 3;
            let fields: Vec<&str> = line.split_whitespace().collect();
            let malformed = || XyzError::MalformedRecord {
                line: line_num,
                content: line.clone(),
            };
            if fields.len() < 4 {
                return Err(malformed());
            }
            let coords: Vec<f64> = fields[1..4]
                .iter()
                .map(|f| f.parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| malformed())?;
            atoms.push(Atom::new(
                fields[0],
                Point3::new(coords[0], coords[1], coords[2]),
                DEFAULT_ELECTRONEGATIVITY,
            ));
        }

        if atoms.len() != expected {
            return Err(XyzError::AtomCountMismatch {
                expected,
                found: atoms.len(),
            });
        }
        Ok(atoms)
    }

    fn write_to(atoms: &[Atom], writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "{}", atoms.len())?;
        writeln!(
            writer,
            "Generated by molpack v{}",
            env!("CARGO_PKG_VERSION")
        )?;
        for atom in atoms {
            writeln!(
                writer,
                "{:<2} {:>12.6} {:>12.6} {:>12.6}",
                atom.symbol, atom.position.x, atom.position.y, atom.position.z
            )?;
        }
        Ok(())
    }
}
