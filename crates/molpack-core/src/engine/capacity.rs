use crate::core::models::cell::SimulationCell;
use tracing::debug;

pub const AVOGADRO_NUMBER: f64 = 6.022e23;
pub const ANGSTROM3_TO_CM3: f64 = 1e-24;

/// Density-based upper bound on how many units fit in the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityEstimate {
    pub max_units: u64,
    pub cell_volume_cm3: f64,
    pub cell_mass_g: f64,
}

/// Estimates the number of units a cube of side `cube_size` Å can hold at
/// `density` g/cm³ for a unit of `molar_mass` g/mol.
///
/// The count is `floor(density * cube_size³ * 1e-24 * N_A / molar_mass)`,
/// clamped at zero. This is advisory and never limits placement.
pub fn estimate_max_units(density: f64, cube_size: f64, molar_mass: f64) -> CapacityEstimate {
    let cell_volume_cm3 = SimulationCell::new(cube_size).volume() * ANGSTROM3_TO_CM3;
    let cell_mass_g = density * cell_volume_cm3;
    let raw = (cell_mass_g * AVOGADRO_NUMBER) / molar_mass;

    let max_units = if raw.is_finite() && raw > 0.0 {
        raw.floor() as u64
    } else {
        0
    };

    debug!(
        volume_cm3 = cell_volume_cm3,
        mass_g = cell_mass_g,
        max_units,
        "Estimated cell capacity."
    );

    CapacityEstimate {
        max_units,
        cell_volume_cm3,
        cell_mass_g,
    }
}
