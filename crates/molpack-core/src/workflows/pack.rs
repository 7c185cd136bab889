use crate::core::elements::ElementTable;
use crate::core::models::template::Template;
use crate::core::models::topology::Bond;
use crate::engine::bonds::{BondSummary, infer_bonds};
use crate::engine::capacity::{CapacityEstimate, estimate_max_units};
use crate::engine::config::PackingConfig;
use crate::engine::error::EngineError;
use crate::engine::placement::{PackingOutcome, place_units};
use crate::engine::progress::{Progress, ProgressReporter};
use rand::Rng;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct PackReport {
    pub template_name: String,
    pub capacity_estimate: CapacityEstimate,
    pub outcome: PackingOutcome,
    pub bonds: Vec<Bond>,
    pub summary: BondSummary,
}

impl PackReport {
    pub fn placed_units(&self) -> usize {
        self.outcome.placed_units
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.complete
    }
}

/// Packs copies of `template` into the cell described by `config`.
///
/// Runs three phases in order: capacity estimation, placement and bond
/// inference. Falling short of the target is reported through
/// [`PackingOutcome::complete`], not as an error.
#[instrument(skip_all, name = "pack_workflow", fields(template = template.name()))]
pub fn run(
    template: &Template,
    config: &PackingConfig,
    elements: &ElementTable,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> Result<PackReport, EngineError> {
    // === Phase 1: Capacity estimate ===
    reporter.report(Progress::PhaseStart {
        name: "Estimating Capacity",
    });
    let capacity_estimate = estimate_max_units(
        config.capacity.density,
        config.placement.cube_size,
        config.capacity.molar_mass,
    );
    info!(
        max_units = capacity_estimate.max_units,
        "Estimated maximum number of units for the cell."
    );
    if capacity_estimate.max_units < config.placement.target_units as u64 {
        warn!(
            target = config.placement.target_units,
            estimate = capacity_estimate.max_units,
            "Target exceeds the density-based estimate; placement may fall short."
        );
    }
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Placement ===
    reporter.report(Progress::PhaseStart {
        name: "Placing Units",
    });
    let outcome = place_units(template.unit(), &config.placement, rng, reporter);
    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Bond inference ===
    reporter.report(Progress::PhaseStart {
        name: "Inferring Bonds",
    });
    let bonds = infer_bonds(outcome.pool.atoms(), elements, config.bonds.tolerance);
    let summary = BondSummary::from_bonds(&bonds, &outcome.pool);
    info!(
        total = summary.total,
        intra_unit = summary.intra_unit,
        inter_unit = summary.inter_unit,
        "Bond inference finished."
    );
    reporter.report(Progress::PhaseFinish);

    Ok(PackReport {
        template_name: template.name().to_string(),
        capacity_estimate,
        outcome,
        bonds,
        summary,
    })
}
