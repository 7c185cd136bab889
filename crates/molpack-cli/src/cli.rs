use clap::{Args, Parser, Subcommand};
use molpack::engine::config::RotationScheme;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "molpack - Random rigid-body packing of small molecules into a cubic cell, with overlap checks, bond inference and a capacity estimate.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for bond inference.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack copies of a molecular template into a cubic cell and write the result.
    Pack(PackArgs),
}

/// Arguments for the `pack` subcommand.
#[derive(Args, Debug, Default)]
pub struct PackArgs {
    // --- Inputs and Outputs ---
    /// Path for the points output file (symbol, x, y, z, electronegativity per line).
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "points_with_symbols.txt"
    )]
    pub output: PathBuf,

    /// Also write the packed atoms as a standard XYZ file.
    #[arg(long, value_name = "PATH")]
    pub xyz: Option<PathBuf>,

    /// Also write the inferred bonds as a CSV file.
    #[arg(long, value_name = "PATH")]
    pub bonds: Option<PathBuf>,

    /// Molecular template in TOML format. Defaults to the built-in water model.
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Element property table in TOML format, merged over the built-in table.
    #[arg(short, long, value_name = "PATH")]
    pub elements: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Placement Overrides ---
    /// Override the number of units to place.
    #[arg(short = 'n', long, value_name = "INT")]
    pub target_units: Option<usize>,

    /// Override the cube edge length in Å.
    #[arg(long, value_name = "FLOAT")]
    pub cube_size: Option<f64>,

    /// Override the minimum inter-unit atom distance in Å.
    #[arg(long, value_name = "FLOAT")]
    pub min_dist: Option<f64>,

    /// Override the total placement attempt budget.
    #[arg(long, value_name = "INT")]
    pub max_attempts: Option<usize>,

    /// Override how random orientations are drawn ('euler' or 'uniform').
    #[arg(long, value_name = "SCHEME")]
    pub rotation: Option<RotationScheme>,

    // --- Bond Overrides ---
    /// Override the bond length tolerance in Å added to the covalent radii sum.
    #[arg(long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// Seed the random number generator for a reproducible packing.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S placement.target-units=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_defaults_to_points_output() {
        let cli = Cli::parse_from(["molpack", "pack"]);
        let Commands::Pack(args) = cli.command;
        assert_eq!(args.output, PathBuf::from("points_with_symbols.txt"));
        assert!(args.template.is_none());
        assert!(args.seed.is_none());
        assert!(args.set_values.is_empty());
    }

    #[test]
    fn parses_overrides_and_global_flags() {
        let cli = Cli::parse_from([
            "molpack",
            "pack",
            "-n",
            "12",
            "--cube-size",
            "15.5",
            "--rotation",
            "uniform",
            "--seed",
            "7",
            "-S",
            "bonds.tolerance=0.3",
            "-vv",
            "-j",
            "2",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.threads, Some(2));
        let Commands::Pack(args) = cli.command;
        assert_eq!(args.target_units, Some(12));
        assert_eq!(args.cube_size, Some(15.5));
        assert_eq!(args.rotation, Some(RotationScheme::Uniform));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.set_values, vec!["bonds.tolerance=0.3".to_string()]);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["molpack", "pack", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_rotation_scheme() {
        let result = Cli::try_parse_from(["molpack", "pack", "--rotation", "spiral"]);
        assert!(result.is_err());
    }
}
