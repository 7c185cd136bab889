use crate::core::elements::ElementTable;
use crate::core::models::atom::Atom;
use crate::core::models::topology::Bond;
use crate::core::models::unit::AtomPool;
use crate::core::utils::geometry::distance;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts of inferred bonds split by whether both atoms share a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BondSummary {
    pub total: usize,
    pub intra_unit: usize,
    pub inter_unit: usize,
}

impl BondSummary {
    pub fn from_bonds(bonds: &[Bond], pool: &AtomPool) -> Self {
        let inter_unit = bonds
            .iter()
            .filter(|b| pool.unit_of(b.atom1) != pool.unit_of(b.atom2))
            .count();
        Self {
            total: bonds.len(),
            intra_unit: bonds.len() - inter_unit,
            inter_unit,
        }
    }
}

#[inline]
fn bonds_from(i: usize, atoms: &[Atom], radii: &[f64], tolerance: f64) -> Vec<Bond> {
    ((i + 1)..atoms.len())
        .filter(|&j| {
            let cutoff = radii[i] + radii[j] + tolerance;
            distance(&atoms[i], &atoms[j]) <= cutoff
        })
        .map(|j| Bond::new(i, j))
        .collect()
}

/// Infers bonds from interatomic distances.
///
/// A pair `(i, j)`, `i < j`, is bonded when its distance is at most the sum
/// of both covalent radii plus `tolerance`. Every pair in `atoms` is tested,
/// including pairs from different units. Unknown symbols have a radius of 0.
/// The result is sorted by `(atom1, atom2)`.
#[instrument(skip_all, name = "bond_inference", fields(atoms = atoms.len(), tolerance = tolerance))]
pub fn infer_bonds(atoms: &[Atom], elements: &ElementTable, tolerance: f64) -> Vec<Bond> {
    let radii: Vec<f64> = atoms
        .iter()
        .map(|a| elements.covalent_radius(&a.symbol))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..atoms.len();

    #[cfg(feature = "parallel")]
    let iterator = (0..atoms.len()).into_par_iter();

    let bonds: Vec<Bond> = iterator
        .flat_map(|i| bonds_from(i, atoms, &radii, tolerance))
        .collect();

    debug!(bonds = bonds.len(), "Bond inference complete.");
    bonds
}
