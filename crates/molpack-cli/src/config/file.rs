use crate::error::{CliError, Result};
use molpack::engine::config::RotationScheme;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePlacementConfig {
    pub target_units: Option<usize>,
    pub cube_size: Option<f64>,
    pub min_dist: Option<f64>,
    pub max_attempts: Option<usize>,
    pub rotation: Option<RotationScheme>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileBondConfig {
    pub tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCapacityConfig {
    pub density: Option<f64>,
    pub molar_mass: Option<f64>,
}

/// Partial packing configuration as written in a TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub placement: Option<FilePlacementConfig>,
    pub bonds: Option<FileBondConfig>,
    pub capacity: Option<FileCapacityConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
