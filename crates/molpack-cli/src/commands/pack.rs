use crate::cli::PackArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use molpack::{
    core::{
        elements::ElementTable,
        io::{bonds::write_bonds_csv_to_path, points::PointsFile, traits::AtomFile, xyz::XyzFile},
        models::template::{Template, TemplateSpec},
    },
    engine::{error::EngineError, progress::ProgressReporter},
    workflows::{self, pack::PackReport},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

pub async fn run(args: PackArgs, quiet: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    execute(args, quiet, &mut stdout)
}

fn execute(args: PackArgs, quiet: bool, out: &mut impl Write) -> Result<()> {
    info!("Resolving configuration from defaults, file and CLI arguments...");
    let app_config = build_config(&args)?;
    debug!("Resolved packing configuration: {:?}", &app_config.core_config);

    let elements = load_elements(app_config.elements_path.as_deref())?;
    let template = load_template(app_config.template_path.as_deref(), &elements)?;
    info!(
        "Using template '{}' with {} atom(s), extent {:.3} Å.",
        template.name(),
        template.atom_count(),
        template.max_extent()
    );

    let mut rng = match app_config.seed {
        Some(seed) => {
            info!("Seeding random number generator with {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core packing workflow...");
    let report = tokio::task::block_in_place(|| {
        workflows::pack::run(
            &template,
            &app_config.core_config,
            &elements,
            &mut rng,
            &reporter,
        )
    })?;

    write_outputs(&report, &app_config)?;
    print_summary(&report, &app_config, out)?;

    Ok(())
}

fn load_elements(path: Option<&Path>) -> Result<ElementTable> {
    let builtin = ElementTable::builtin();
    let Some(path) = path else {
        return Ok(builtin);
    };

    info!("Loading element overrides from {:?}", path);
    let overrides = ElementTable::load(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    debug!("Loaded {} element override(s).", overrides.len());
    Ok(builtin.merged_with(overrides))
}

fn load_template(path: Option<&Path>, elements: &ElementTable) -> Result<Template> {
    let Some(path) = path else {
        return Ok(Template::water(elements));
    };

    info!("Loading molecular template from {:?}", path);
    let spec = TemplateSpec::load(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    let template = Template::resolve(&spec, elements).map_err(EngineError::from)?;
    Ok(template)
}

fn write_outputs(report: &PackReport, config: &AppConfig) -> Result<()> {
    let atoms = report.outcome.pool.atoms();

    info!("Writing {} atom(s) to {:?}", atoms.len(), &config.output_path);
    PointsFile::write_to_path(atoms, &config.output_path).map_err(|e| CliError::FileParsing {
        path: config.output_path.clone(),
        source: e.into(),
    })?;

    if let Some(xyz_path) = &config.xyz_path {
        info!("Writing XYZ output to {:?}", xyz_path);
        XyzFile::write_to_path(atoms, xyz_path).map_err(|e| CliError::FileParsing {
            path: xyz_path.clone(),
            source: e.into(),
        })?;
    }

    if let Some(bonds_path) = &config.bonds_path {
        info!("Writing {} bond(s) to {:?}", report.bonds.len(), bonds_path);
        write_bonds_csv_to_path(&report.bonds, &report.outcome.pool, bonds_path)
            .map_err(|e| CliError::FileParsing {
                path: bonds_path.clone(),
                source: e.into(),
            })?;
    }

    Ok(())
}

fn print_summary(report: &PackReport, config: &AppConfig, out: &mut impl Write) -> Result<()> {
    let outcome = &report.outcome;
    writeln!(
        out,
        "Estimated maximum number of molecules that can fit in the box: {}",
        report.capacity_estimate.max_units
    )?;
    writeln!(out, "Simulation complete.")?;
    writeln!(
        out,
        "Placed units: {} / {} ({} attempts)",
        outcome.placed_units, outcome.target_units, outcome.tries
    )?;

    if !report.is_complete() {
        warn!(
            "Only {} of {} units were placed within {} attempts.",
            outcome.placed_units, outcome.target_units, outcome.tries
        );
        writeln!(
            out,
            "Warning: target of {} units not reached ({} short after {} attempts).",
            outcome.target_units,
            outcome.shortfall(),
            outcome.tries
        )?;
    }

    writeln!(
        out,
        "Bonds inferred: {} ({} intra-unit, {} inter-unit)",
        report.summary.total, report.summary.intra_unit, report.summary.inter_unit
    )?;
    writeln!(
        out,
        "Output (coordinates in Å, EN in Pauling) written to {}",
        config.output_path.display()
    )?;
    if let Some(xyz_path) = &config.xyz_path {
        writeln!(out, "XYZ output written to {}", xyz_path.display())?;
    }
    if let Some(bonds_path) = &config.bonds_path {
        writeln!(out, "Bond list written to {}", bonds_path.display())?;
    }
    Ok(())
}
