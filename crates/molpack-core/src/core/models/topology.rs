use std::fmt;

/// An inferred covalent bond between two atoms of an [`AtomPool`](super::unit::AtomPool).
///
/// Bonds are unordered; the constructor stores the smaller index first so that
/// two bonds over the same pair always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    pub atom1: usize, // Smaller pool index
    pub atom2: usize, // Larger pool index
}

impl Bond {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            atom1: a.min(b),
            atom2: a.max(b),
        }
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.atom1, self.atom2)
    }
}
