//! Single-trial race engine. Every rider traverses the route independently,
//! accumulating elapsed time segment by segment; there is no drafting or
//! tactical interaction between riders.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;

use crate::error::SimError;
use crate::race::physiology;
use crate::race::rider::Rider;
use crate::race::route::Route;

/// One rider's outcome within a trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finish {
    pub name: String,
    pub finish_time_s: f64,
}

/// Finish order of one complete trial, ascending by time. Produced fresh per
/// trial and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialResult {
    pub finishers: Vec<Finish>,
}

impl TrialResult {
    /// The rider with the lowest finish time, if the trial had any riders.
    pub fn winner(&self) -> Option<&Finish> {
        self.finishers.first()
    }
}

/// Simulate one race: each rider rides every segment in order with a fresh
/// form draw per segment, and the field is ranked by total elapsed time.
/// Ties break on rider name so equal times still order deterministically.
///
/// The rider set of the result always equals the input set; an empty field,
/// a duplicated name, or a degenerate per-segment performance is an error
/// for the whole trial. No retries, no substituted defaults.
pub fn simulate_race(
    riders: &[Rider],
    route: &Route,
    rng: &mut impl Rng,
) -> Result<TrialResult, SimError> {
    if riders.is_empty() {
        return Err(SimError::Simulation("race needs at least one rider".to_string()));
    }
    let mut seen = HashSet::with_capacity(riders.len());
    for rider in riders {
        if !seen.insert(rider.name()) {
            return Err(SimError::Simulation(format!(
                "duplicate rider name `{}` in field",
                rider.name()
            )));
        }
    }

    let total_distance = route.total_distance_m();
    let mut finishers = Vec::with_capacity(riders.len());
    for rider in riders {
        let mut elapsed_s = 0.0;
        let mut covered_m = 0.0;
        for segment in route.segments() {
            let progress = covered_m / total_distance;
            let speed = physiology::segment_speed(rider, segment, progress, rng)?;
            elapsed_s += segment.distance_m / speed;
            covered_m += segment.distance_m;
        }
        finishers.push(Finish {
            name: rider.name().to_string(),
            finish_time_s: elapsed_s,
        });
    }

    finishers.sort_by(|a, b| {
        match a.finish_time_s.total_cmp(&b.finish_time_s) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        }
    });
    Ok(TrialResult { finishers })
}
