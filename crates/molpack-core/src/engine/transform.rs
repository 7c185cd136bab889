use super::config::RotationScheme;
use crate::core::models::cell::SimulationCell;
use crate::core::models::unit::MolecularUnit;
use crate::core::utils::geometry::{self, ElementaryAngles};
use nalgebra::Vector3;
use rand::Rng;

/// Returns a randomly oriented copy of `unit`.
///
/// Draws three independent uniform samples from `rng` and turns them into a
/// rotation according to `scheme`. The input unit is left untouched.
pub fn rotate(unit: &MolecularUnit, scheme: RotationScheme, rng: &mut impl Rng) -> MolecularUnit {
    let u1 = rng.gen_range(0.0..1.0);
    let u2 = rng.gen_range(0.0..1.0);
    let u3 = rng.gen_range(0.0..1.0);
    match scheme {
        RotationScheme::Euler => {
            geometry::rotate_elementary(unit, &ElementaryAngles::from_unit_samples(u1, u2, u3))
        }
        RotationScheme::Uniform => {
            geometry::rotate_quaternion(unit, &geometry::uniform_quaternion(u1, u2, u3))
        }
    }
}

/// Returns a copy of `unit` shifted by `(dx, dy, dz)`.
pub fn translate(unit: &MolecularUnit, dx: f64, dy: f64, dz: f64) -> MolecularUnit {
    geometry::translate(unit, &Vector3::new(dx, dy, dz))
}

/// Produces randomly placed copies of a template inside a cell.
#[derive(Debug, Clone, Copy)]
pub struct UnitTransformer<'a> {
    template: &'a MolecularUnit,
    cell: SimulationCell,
    scheme: RotationScheme,
}

impl<'a> UnitTransformer<'a> {
    pub fn new(template: &'a MolecularUnit, cell: SimulationCell, scheme: RotationScheme) -> Self {
        Self {
            template,
            cell,
            scheme,
        }
    }

    pub fn template(&self) -> &MolecularUnit {
        self.template
    }

    /// Draws a translation, then a rotation, and returns the placed candidate.
    pub fn random_candidate(&self, rng: &mut impl Rng) -> MolecularUnit {
        let offset = self.cell.random_offset(rng);
        let rotated = rotate(self.template, self.scheme, rng);
        translate(&rotated, offset.x, offset.y, offset.z)
    }
}
