//! Monte Carlo driver: N independent trials, each on its own derived seed
//! stream, reduced into a single [AggregateResult]. Sequential and parallel
//! runs visit the same per-trial seeds, so both produce bit-identical
//! aggregates for a given base seed.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::SimError;
use crate::montecarlo::aggregate::AggregateResult;
use crate::montecarlo::generator::RiderGenerator;
use crate::parallel::batch_ranges;
use crate::race::engine::simulate_race;
use crate::race::rider::{Rider, RiderTraits};
use crate::race::rng::stream_seed;
use crate::race::route::Route;

/// Who lines up at the start of every trial.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// The same validated roster rides every trial.
    Roster(Vec<Rider>),
    /// A fresh field of `count` riders is sampled per trial from the trial's
    /// own RNG stream; traits are fixed within a trial.
    Generated { generator: RiderGenerator, count: usize },
}

/// One trial on its own seed stream. Returns the winner's name and traits.
fn run_trial(
    field: &Field,
    route: &Route,
    trial: u64,
    base_seed: u64,
) -> Result<(String, RiderTraits), SimError> {
    let mut rng = SmallRng::seed_from_u64(stream_seed(base_seed, trial));
    let sampled;
    let riders: &[Rider] = match field {
        Field::Roster(riders) => riders,
        Field::Generated { generator, count } => {
            sampled = generator.sample_field(*count, &mut rng)?;
            &sampled
        }
    };

    let result = simulate_race(riders, route, &mut rng)?;
    let winner = result
        .winner()
        .ok_or_else(|| SimError::Simulation("trial produced no finishers".to_string()))?;
    let traits = riders
        .iter()
        .find(|rider| rider.name() == winner.name)
        .map(Rider::traits)
        .ok_or_else(|| {
            SimError::Simulation(format!("winner `{}` is not part of the field", winner.name))
        })?;
    Ok((winner.name.clone(), traits))
}

fn reduce(winners: Vec<(String, RiderTraits)>) -> AggregateResult {
    let mut aggregate = AggregateResult::default();
    for (name, traits) in winners {
        aggregate.record_win(&name, traits);
    }
    aggregate
}

/// Run `trials` independent races sequentially. A zero-trial run returns an
/// empty aggregate; any failed trial aborts the whole run so the statistics
/// never silently drop trials.
pub fn run_monte_carlo(
    field: &Field,
    route: &Route,
    trials: usize,
    seed: u64,
) -> Result<AggregateResult, SimError> {
    info!(trials, seed, "running aggregate race batch");
    let winners = (0..trials as u64)
        .map(|trial| run_trial(field, route, trial, seed))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reduce(winners))
}

/// Like [run_monte_carlo] but distributes trial batches across the Rayon
/// pool. Trials keep their per-index seed streams and the reduction happens
/// once after the parallel map, so the result is identical to the sequential
/// run.
pub fn run_monte_carlo_parallel(
    field: &Field,
    route: &Route,
    trials: usize,
    seed: u64,
) -> Result<AggregateResult, SimError> {
    info!(trials, seed, "running aggregate race batch across worker threads");
    let ranges = batch_ranges(trials, rayon::current_num_threads().saturating_mul(4));
    let batches = ranges
        .into_par_iter()
        .map(|(start, end)| {
            let batch = (start as u64..end as u64)
                .map(|trial| run_trial(field, route, trial, seed))
                .collect::<Result<Vec<_>, _>>();
            debug!(start, end, "trial batch finished");
            batch
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reduce(batches.into_iter().flatten().collect()))
}
