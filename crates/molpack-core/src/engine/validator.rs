use crate::core::models::atom::Atom;
use crate::core::models::unit::MolecularUnit;
use crate::core::utils::geometry::distance_squared;

/// The first pair found closer than the minimum distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub candidate_index: usize,
    pub pool_index: usize,
    pub distance: f64,
}

/// Returns the first candidate/pool atom pair closer than `min_dist`, if any.
///
/// Pairs exactly `min_dist` apart do not overlap. Distances are plain
/// Euclidean distances without periodic images.
pub fn find_overlap(
    candidate: &MolecularUnit,
    existing: &[Atom],
    min_dist: f64,
) -> Option<Overlap> {
    let min_dist_sq = min_dist * min_dist;
    for (candidate_index, a) in candidate.iter().enumerate() {
        for (pool_index, b) in existing.iter().enumerate() {
            let d_sq = distance_squared(a, b);
            if d_sq < min_dist_sq {
                return Some(Overlap {
                    candidate_index,
                    pool_index,
                    distance: d_sq.sqrt(),
                });
            }
        }
    }
    None
}

/// Returns `true` iff every atom of `candidate` is at least `min_dist` from
/// every atom in `existing`. An empty pool always validates.
#[inline]
pub fn is_valid(candidate: &MolecularUnit, existing: &[Atom], min_dist: f64) -> bool {
    find_overlap(candidate, existing, min_dist).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom_at(x: f64, y: f64, z: f64) -> Atom {
        Atom::new("O", Point3::new(x, y, z), 3.44)
    }

    #[test]
    fn empty_pool_always_validates() {
        let candidate = MolecularUnit::new(vec![atom_at(0.0, 0.0, 0.0)]);
        assert!(is_valid(&candidate, &[], 1e6));
    }

    #[test]
    fn empty_candidate_always_validates() {
        let pool = [atom_at(0.0, 0.0, 0.0)];
        assert!(is_valid(&MolecularUnit::default(), &pool, 5.0));
    }

    #[test]
    fn rejects_any_pair_closer_than_min_dist() {
        let pool = vec![atom_at(0.0, 0.0, 0.0), atom_at(10.0, 0.0, 0.0)];
        let candidate = MolecularUnit::new(vec![atom_at(5.0, 0.0, 0.0), atom_at(8.0, 0.0, 0.0)]);

        assert!(!is_valid(&candidate, &pool, 2.5));
        let overlap = find_overlap(&candidate, &pool, 2.5).unwrap();
        assert_eq!(overlap.candidate_index, 1);
        assert_eq!(overlap.pool_index, 1);
        assert!((overlap.distance - 2.0).abs() < 1e-12);
    }

    #[test]
    fn accepts_pair_exactly_at_min_dist() {
        let pool = vec![atom_at(0.0, 0.0, 0.0)];
        let candidate = MolecularUnit::new(vec![atom_at(0.0, 3.0, 4.0)]);
        assert!(is_valid(&candidate, &pool, 5.0));
        assert!(!is_valid(&candidate, &pool, 5.0 + 1e-9));
    }

    #[test]
    fn no_periodic_wraparound() {
        // Atoms near opposite faces of a 10 Å cell are 9.8 Å apart, not 0.2 Å.
        let pool = vec![atom_at(0.1, 5.0, 5.0)];
        let candidate = MolecularUnit::new(vec![atom_at(9.9, 5.0, 5.0)]);
        assert!(is_valid(&candidate, &pool, 2.5));
    }
}
