use super::atom::Atom;
use nalgebra::{Point3, Vector3};

/// One rigid instance of the packed molecular species.
///
/// The atom order is fixed at template time and preserved by every transform.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MolecularUnit {
    atoms: Vec<Atom>,
}

impl MolecularUnit {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }

    pub fn into_atoms(self) -> Vec<Atom> {
        self.atoms
    }

    /// Geometric center of the unit, or `None` for an empty unit.
    pub fn centroid(&self) -> Option<Point3<f64>> {
        if self.atoms.is_empty() {
            return None;
        }
        let sum: Vector3<f64> = self.atoms.iter().map(|a| a.position.coords).sum();
        Some(Point3::from(sum / self.atoms.len() as f64))
    }

    /// Builds a new unit by mapping every atom position through `f`.
    pub fn map_positions<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Point3<f64>) -> Point3<f64>,
    {
        Self {
            atoms: self
                .atoms
                .iter()
                .map(|a| a.with_position(f(&a.position)))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MolecularUnit {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

/// The append-only collection of every atom from every accepted unit.
///
/// Atoms are stored in placement order, then intra-unit order. The pool also
/// records where each unit starts so callers can recover unit membership
/// without relying on a fixed unit size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomPool {
    atoms: Vec<Atom>,
    unit_starts: Vec<usize>,
}

impl AtomPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every atom of `unit` as one new unit.
    ///
    /// Returns the index of the newly added unit.
    pub fn push_unit(&mut self, unit: MolecularUnit) -> usize {
        self.unit_starts.push(self.atoms.len());
        self.atoms.extend(unit.into_atoms());
        self.unit_starts.len() - 1
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn unit_count(&self) -> usize {
        self.unit_starts.len()
    }

    /// Returns the atoms belonging to the unit at `unit_index`.
    pub fn unit_atoms(&self, unit_index: usize) -> Option<&[Atom]> {
        let start = *self.unit_starts.get(unit_index)?;
        let end = self
            .unit_starts
            .get(unit_index + 1)
            .copied()
            .unwrap_or(self.atoms.len());
        Some(&self.atoms[start..end])
    }

    /// Returns the index of the unit that owns the atom at `atom_index`.
    pub fn unit_of(&self, atom_index: usize) -> Option<usize> {
        if atom_index >= self.atoms.len() {
            return None;
        }
        let units_started = self.unit_starts.partition_point(|&start| start <= atom_index);
        Some(units_started - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f64) -> MolecularUnit {
        MolecularUnit::new(vec![
            Atom::new("O", Point3::new(x, 0.0, 0.0), 3.44),
            Atom::new("H", Point3::new(x + 1.0, 0.0, 0.0), 2.20),
        ])
    }

    #[test]
    fn centroid_is_mean_position() {
        let unit = unit_at(0.0);
        assert_eq!(unit.centroid(), Some(Point3::new(0.5, 0.0, 0.0)));
        assert_eq!(MolecularUnit::default().centroid(), None);
    }

    #[test]
    fn map_positions_preserves_order_and_metadata() {
        let unit = unit_at(0.0);
        let mapped = unit.map_positions(|p| p + Vector3::new(0.0, 2.0, 0.0));

        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped.atoms()[0].symbol, "O");
        assert_eq!(mapped.atoms()[1].symbol, "H");
        assert_eq!(mapped.atoms()[1].position, Point3::new(1.0, 2.0, 0.0));
        assert_eq!(mapped.atoms()[1].electronegativity, 2.20);
        assert_eq!(unit.atoms()[1].position, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn pool_tracks_unit_membership() {
        let mut pool = AtomPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.unit_of(0), None);

        assert_eq!(pool.push_unit(unit_at(0.0)), 0);
        assert_eq!(pool.push_unit(unit_at(10.0)), 1);

        assert_eq!(pool.len(), 4);
        assert_eq!(pool.unit_count(), 2);
        assert_eq!(pool.unit_of(0), Some(0));
        assert_eq!(pool.unit_of(1), Some(0));
        assert_eq!(pool.unit_of(2), Some(1));
        assert_eq!(pool.unit_of(3), Some(1));
        assert_eq!(pool.unit_of(4), None);
    }

    #[test]
    fn unit_atoms_returns_slices_in_placement_order() {
        let mut pool = AtomPool::new();
        pool.push_unit(unit_at(0.0));
        pool.push_unit(unit_at(10.0));

        let second = pool.unit_atoms(1).unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].position, Point3::new(10.0, 0.0, 0.0));
        assert!(pool.unit_atoms(2).is_none());
    }
}
