use molpack::engine::config::RotationScheme;

pub struct DefaultsConfig {
    pub target_units: usize,
    pub cube_size: f64,
    pub min_dist: f64,
    pub max_attempts: usize,
    pub rotation: RotationScheme,
    pub bond_tolerance: f64,
    pub density: f64,
    pub molar_mass: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_units: 33,
            cube_size: 10.0,
            min_dist: 2.5,
            max_attempts: 10_000,
            rotation: RotationScheme::Euler,
            bond_tolerance: 0.45,
            density: 1.0,
            molar_mass: 18.0,
        }
    }
}
