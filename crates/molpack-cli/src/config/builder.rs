use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::PackArgs;
use crate::error::{CliError, Result};
use molpack::engine::config as core_config;
use std::str::FromStr;

/// Resolves the final configuration for `pack`.
///
/// Precedence, highest first: explicit CLI flags, `-S key=value` overrides,
/// the `--config` file, built-in defaults.
pub fn build_config(args: &PackArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let placement = file_config.placement.take().unwrap_or_default();
    let bonds = file_config.bonds.take().unwrap_or_default();
    let capacity = file_config.capacity.take().unwrap_or_default();

    let core_config = core_config::PackingConfigBuilder::new()
        .target_units(
            args.target_units
                .or(placement.target_units)
                .unwrap_or(defaults.target_units),
        )
        .cube_size(
            args.cube_size
                .or(placement.cube_size)
                .unwrap_or(defaults.cube_size),
        )
        .min_dist(
            args.min_dist
                .or(placement.min_dist)
                .unwrap_or(defaults.min_dist),
        )
        .max_attempts(
            args.max_attempts
                .or(placement.max_attempts)
                .unwrap_or(defaults.max_attempts),
        )
        .rotation(
            args.rotation
                .or(placement.rotation)
                .unwrap_or(defaults.rotation),
        )
        .bond_tolerance(
            args.tolerance
                .or(bonds.tolerance)
                .unwrap_or(defaults.bond_tolerance),
        )
        .density(capacity.density.unwrap_or(defaults.density))
        .molar_mass(capacity.molar_mass.unwrap_or(defaults.molar_mass))
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        output_path: args.output.clone(),
        xyz_path: args.xyz.clone(),
        bonds_path: args.bonds.clone(),
        template_path: args.template.clone(),
        elements_path: args.elements.clone(),
        seed: args.seed,
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value_str))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Argument(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "placement.target-units" => {
                config
                    .placement
                    .get_or_insert_with(Default::default)
                    .target_units = Some(parse_value(key, value_str, "integer")?);
            }
            "placement.cube-size" => {
                config
                    .placement
                    .get_or_insert_with(Default::default)
                    .cube_size = Some(parse_value(key, value_str, "float")?);
            }
            "placement.min-dist" => {
                config
                    .placement
                    .get_or_insert_with(Default::default)
                    .min_dist = Some(parse_value(key, value_str, "float")?);
            }
            "placement.max-attempts" => {
                config
                    .placement
                    .get_or_insert_with(Default::default)
                    .max_attempts = Some(parse_value(key, value_str, "integer")?);
            }
            "placement.rotation" => {
                config
                    .placement
                    .get_or_insert_with(Default::default)
                    .rotation = Some(parse_value(key, value_str, "rotation scheme")?);
            }
            "bonds.tolerance" => {
                config.bonds.get_or_insert_with(Default::default).tolerance =
                    Some(parse_value(key, value_str, "float")?);
            }
            "capacity.density" => {
                config.capacity.get_or_insert_with(Default::default).density =
                    Some(parse_value(key, value_str, "float")?);
            }
            "capacity.molar-mass" => {
                config
                    .capacity
                    .get_or_insert_with(Default::default)
                    .molar_mass = Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
