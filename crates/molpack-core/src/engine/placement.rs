use super::config::PlacementConfig;
use super::progress::{Progress, ProgressReporter};
use super::transform::UnitTransformer;
use super::validator::find_overlap;
use crate::core::models::cell::SimulationCell;
use crate::core::models::unit::{AtomPool, MolecularUnit};
use rand::Rng;
use tracing::{debug, info, instrument, trace, warn};

const STATUS_INTERVAL: usize = 500;

/// Outcome of a single placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Accepted { unit_index: usize },
    Rejected,
}

/// Final state of a placement run.
///
/// Falling short of the target is a normal outcome: `complete` is `false` and
/// `placed_units` holds whatever was achieved before the attempt budget ran out.
#[derive(Debug, Clone, PartialEq)]
pub struct PackingOutcome {
    pub pool: AtomPool,
    pub placed_units: usize,
    pub target_units: usize,
    pub tries: usize,
    pub complete: bool,
}

impl PackingOutcome {
    pub fn shortfall(&self) -> usize {
        self.target_units.saturating_sub(self.placed_units)
    }
}

/// Rejection-sampling placement of rigid copies of a template.
///
/// Each step draws one random candidate and appends it to the pool only if it
/// clears `min_dist` against every atom accepted so far. The engine finishes
/// once `target_units` units are placed or `max_attempts` steps were taken.
pub struct PlacementEngine<'a> {
    transformer: UnitTransformer<'a>,
    min_dist: f64,
    target_units: usize,
    max_attempts: usize,
    pool: AtomPool,
    placed_units: usize,
    tries: usize,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(template: &'a MolecularUnit, config: &PlacementConfig) -> Self {
        let cell = SimulationCell::new(config.cube_size);
        Self {
            transformer: UnitTransformer::new(template, cell, config.rotation),
            min_dist: config.min_dist,
            target_units: config.target_units,
            max_attempts: config.max_attempts,
            pool: AtomPool::new(),
            placed_units: 0,
            tries: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.placed_units >= self.target_units || self.tries >= self.max_attempts
    }

    /// Runs one placement attempt, or returns `None` if the engine is finished.
    pub fn step(&mut self, rng: &mut impl Rng) -> Option<StepResult> {
        if self.is_finished() {
            return None;
        }

        let candidate = self.transformer.random_candidate(rng);
        let result = match find_overlap(&candidate, self.pool.atoms(), self.min_dist) {
            None => {
                let unit_index = self.pool.push_unit(candidate);
                self.placed_units += 1;
                StepResult::Accepted { unit_index }
            }
            Some(overlap) => {
                trace!(
                    attempt = self.tries,
                    pool_atom = overlap.pool_index,
                    distance = overlap.distance,
                    "Candidate rejected."
                );
                StepResult::Rejected
            }
        };
        self.tries += 1;
        Some(result)
    }

    pub fn pool(&self) -> &AtomPool {
        &self.pool
    }

    pub fn placed_units(&self) -> usize {
        self.placed_units
    }

    pub fn tries(&self) -> usize {
        self.tries
    }

    pub fn into_outcome(self) -> PackingOutcome {
        PackingOutcome {
            complete: self.placed_units >= self.target_units,
            pool: self.pool,
            placed_units: self.placed_units,
            target_units: self.target_units,
            tries: self.tries,
        }
    }
}

/// Places up to `config.target_units` copies of `template` and returns the outcome.
///
/// Never fails: exhausting `config.max_attempts` before reaching the target
/// yields an incomplete outcome and a warning.
#[instrument(skip_all, name = "placement_engine", fields(target = config.target_units, max_attempts = config.max_attempts))]
pub fn place_units(
    template: &MolecularUnit,
    config: &PlacementConfig,
    rng: &mut impl Rng,
    reporter: &ProgressReporter,
) -> PackingOutcome {
    debug!(
        cube_size = config.cube_size,
        min_dist = config.min_dist,
        rotation = %config.rotation,
        atoms_per_unit = template.len(),
        "Starting rejection-sampling placement."
    );

    let mut engine = PlacementEngine::new(template, config);
    reporter.report(Progress::TaskStart {
        total_steps: config.target_units as u64,
    });

    while let Some(result) = engine.step(rng) {
        if let StepResult::Accepted { unit_index } = result {
            debug!(
                unit = unit_index,
                attempt = engine.tries(),
                "Unit accepted."
            );
            reporter.report(Progress::TaskIncrement { amount: 1 });
        }
        if engine.tries() % STATUS_INTERVAL == 0 {
            reporter.report(Progress::StatusUpdate {
                text: format!("{} attempts", engine.tries()),
            });
        }
    }

    reporter.report(Progress::TaskFinish);
    let outcome = engine.into_outcome();

    if outcome.complete {
        info!(
            placed = outcome.placed_units,
            tries = outcome.tries,
            "Placement reached its target."
        );
    } else {
        warn!(
            placed = outcome.placed_units,
            target = outcome.target_units,
            tries = outcome.tries,
            "Attempt budget exhausted before reaching the target; keeping partial result."
        );
        reporter.report(Progress::Message(format!(
            "Placed {} of {} units after {} attempts",
            outcome.placed_units, outcome.target_units, outcome.tries
        )));
    }
    outcome
}
