#[cfg(test)]
use nalgebra::Point3;
use nalgebra::Vector3;
use rand::Rng;

/// Cubic simulation cell with one corner at the origin.
///
/// The cell only bounds where unit origins are drawn. Atoms of a rotated unit
/// may extend past its faces; nothing is wrapped or clipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationCell {
    pub cube_size: f64,
}

impl SimulationCell {
    pub fn new(cube_size: f64) -> Self {
        Self { cube_size }
    }

    /// Cell volume in cubic Angstroms.
    pub fn volume(&self) -> f64 {
        self.cube_size.powi(3)
    }

    /// Draws an offset with every component uniform in `[0, cube_size)`.
    ///
    /// A zero-sized cell always yields the zero vector.
    pub fn random_offset(&self, rng: &mut impl Rng) -> Vector3<f64> {
        if self.cube_size <= 0.0 {
            return Vector3::zeros();
        }
        Vector3::new(
            rng.gen_range(0.0..self.cube_size),
            rng.gen_range(0.0..self.cube_size),
            rng.gen_range(0.0..self.cube_size),
        )
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, point: &Point3<f64>) -> bool {
        point.iter().all(|&c| (0.0..self.cube_size).contains(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn volume_is_cube_of_side() {
        assert_eq!(SimulationCell::new(10.0).volume(), 1000.0);
    }

    #[test]
    fn random_offsets_stay_inside_cell() {
        let cell = SimulationCell::new(7.5);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let offset = cell.random_offset(&mut rng);
            assert!(cell.contains(&Point3::from(offset)));
        }
    }

    #[test]
    fn zero_sized_cell_yields_zero_offset() {
        let cell = SimulationCell::new(0.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(cell.random_offset(&mut rng), Vector3::zeros());
    }

    #[test]
    fn contains_excludes_upper_faces() {
        let cell = SimulationCell::new(5.0);
        assert!(cell.contains(&Point3::new(0.0, 0.0, 0.0)));
        assert!(cell.contains(&Point3::new(4.99, 2.0, 0.1)));
        assert!(!cell.contains(&Point3::new(5.0, 2.0, 0.1)));
        assert!(!cell.contains(&Point3::new(-0.1, 2.0, 0.1)));
    }
}
