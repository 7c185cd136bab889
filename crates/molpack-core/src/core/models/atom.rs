use nalgebra::{Point3, Vector3};

/// Represents a single atom of a packed molecular unit.
///
/// An atom is a geometric sample point tagged with its chemical element and the
/// Pauling electronegativity resolved when the template was built. Transforms
/// never modify an atom in place; they produce new atoms with updated positions
/// and carry the symbol and electronegativity through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The chemical element symbol (e.g., "O", "H", "Cl").
    pub symbol: String,
    /// The 3D coordinates of the atom in Angstroms, in the absolute cell frame.
    pub position: Point3<f64>,
    /// The electronegativity of the element on the Pauling scale.
    pub electronegativity: f64,
}

impl Atom {
    /// Creates a new `Atom` from its symbol, position and electronegativity.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The chemical element symbol.
    /// * `position` - The 3D coordinates of the atom.
    /// * `electronegativity` - The Pauling electronegativity of the element.
    pub fn new(symbol: &str, position: Point3<f64>, electronegativity: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            position,
            electronegativity,
        }
    }

    /// Returns a copy of this atom with its position replaced.
    pub fn with_position(&self, position: Point3<f64>) -> Self {
        Self {
            symbol: self.symbol.clone(),
            position,
            electronegativity: self.electronegativity,
        }
    }

    /// Returns a copy of this atom shifted by `offset`.
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        self.with_position(self.position + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_all_fields() {
        let atom = Atom::new("O", Point3::new(1.0, 2.0, 3.0), 3.44);

        assert_eq!(atom.symbol, "O");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.electronegativity, 3.44);
    }

    #[test]
    fn with_position_keeps_symbol_and_electronegativity() {
        let atom = Atom::new("H", Point3::origin(), 2.20);
        let moved = atom.with_position(Point3::new(-1.0, 0.5, 4.0));

        assert_eq!(moved.symbol, "H");
        assert_eq!(moved.electronegativity, 2.20);
        assert_eq!(moved.position, Point3::new(-1.0, 0.5, 4.0));
        assert_eq!(atom.position, Point3::origin());
    }

    #[test]
    fn translated_adds_offset() {
        let atom = Atom::new("C", Point3::new(1.0, 1.0, 1.0), 2.55);
        let shifted = atom.translated(&Vector3::new(0.5, -1.0, 2.0));

        assert_eq!(shifted.position, Point3::new(1.5, 0.0, 3.0));
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let atom1 = Atom::new("N", Point3::new(0.0, 0.0, 0.0), 3.04);
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
