use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// How a random orientation is drawn for each placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotationScheme {
    /// Three uniform angles applied as elementary rotations about the x, y and z axes.
    #[default]
    Euler,
    /// A uniformly distributed rotation drawn as a random unit quaternion.
    #[serde(alias = "quaternion")]
    Uniform,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown rotation scheme '{0}'. Expected 'euler' or 'uniform'.")]
pub struct ParseRotationSchemeError(String);

impl FromStr for RotationScheme {
    type Err = ParseRotationSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Self::Euler),
            "uniform" | "quaternion" => Ok(Self::Uniform),
            _ => Err(ParseRotationSchemeError(s.to_string())),
        }
    }
}

impl fmt::Display for RotationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Euler => write!(f, "euler"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementConfig {
    pub target_units: usize,
    pub cube_size: f64,
    pub min_dist: f64,
    pub max_attempts: usize,
    pub rotation: RotationScheme,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BondConfig {
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapacityConfig {
    pub density: f64,
    pub molar_mass: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackingConfig {
    pub placement: PlacementConfig,
    pub bonds: BondConfig,
    pub capacity: CapacityConfig,
}

#[derive(Default)]
pub struct PackingConfigBuilder {
    target_units: Option<usize>,
    cube_size: Option<f64>,
    min_dist: Option<f64>,
    max_attempts: Option<usize>,
    rotation: Option<RotationScheme>,
    bond_tolerance: Option<f64>,
    density: Option<f64>,
    molar_mass: Option<f64>,
}

impl PackingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_units(mut self, n: usize) -> Self {
        self.target_units = Some(n);
        self
    }
    pub fn cube_size(mut self, size: f64) -> Self {
        self.cube_size = Some(size);
        self
    }
    pub fn min_dist(mut self, dist: f64) -> Self {
        self.min_dist = Some(dist);
        self
    }
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }
    pub fn rotation(mut self, scheme: RotationScheme) -> Self {
        self.rotation = Some(scheme);
        self
    }
    pub fn bond_tolerance(mut self, tolerance: f64) -> Self {
        self.bond_tolerance = Some(tolerance);
        self
    }
    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }
    pub fn molar_mass(mut self, molar_mass: f64) -> Self {
        self.molar_mass = Some(molar_mass);
        self
    }

    pub fn build(self) -> Result<PackingConfig, ConfigError> {
        let placement = PlacementConfig {
            target_units: required("target_units", self.target_units)?,
            cube_size: non_negative("cube_size", self.cube_size)?,
            min_dist: non_negative("min_dist", self.min_dist)?,
            max_attempts: required("max_attempts", self.max_attempts)?,
            rotation: self.rotation.unwrap_or_default(),
        };
        let bonds = BondConfig {
            tolerance: non_negative("bond_tolerance", self.bond_tolerance)?,
        };
        let capacity = CapacityConfig {
            density: non_negative("density", self.density)?,
            molar_mass: positive("molar_mass", self.molar_mass)?,
        };
        Ok(PackingConfig {
            placement,
            bonds,
            capacity,
        })
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::MissingParameter(name))
}

fn non_negative(name: &'static str, value: Option<f64>) -> Result<f64, ConfigError> {
    let value = required(name, value)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be a finite, non-negative number (got {})", value),
        });
    }
    Ok(value)
}

fn positive(name: &'static str, value: Option<f64>) -> Result<f64, ConfigError> {
    let value = required(name, value)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be a finite, positive number (got {})", value),
        });
    }
    Ok(value)
}
