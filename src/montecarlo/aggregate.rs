//! Running accumulation of trial outcomes into win counts and winner-trait
//! means. The aggregate is mutated incrementally as trials complete and only
//! finalized into averages once the run is over.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::race::rider::RiderTraits;

/// Accumulated outcome of an aggregate run. Win counts always sum to the
/// number of recorded trials; trait sums pool the traits of every winning
/// instance (a rider winning twice contributes twice).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateResult {
    trials: u64,
    win_counts: BTreeMap<String, u64>,
    trait_sums: BTreeMap<&'static str, f64>,
}

impl AggregateResult {
    /// Record one completed trial: the winner's name and their traits.
    pub fn record_win(&mut self, winner: &str, traits: RiderTraits) {
        self.trials += 1;
        *self.win_counts.entry(winner.to_string()).or_insert(0) += 1;
        for (trait_name, value) in traits.as_pairs() {
            *self.trait_sums.entry(trait_name).or_insert(0.0) += value;
        }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn win_count(&self, name: &str) -> u64 {
        self.win_counts.get(name).copied().unwrap_or(0)
    }

    pub fn win_counts(&self) -> &BTreeMap<String, u64> {
        &self.win_counts
    }

    /// Per-trait mean pooled across all winning instances. Empty when no
    /// trials have been recorded, so a zero-trial run never divides by zero.
    pub fn winner_trait_means(&self) -> BTreeMap<&'static str, f64> {
        if self.trials == 0 {
            return BTreeMap::new();
        }
        self.trait_sums
            .iter()
            .map(|(name, sum)| (*name, sum / self.trials as f64))
            .collect()
    }

    /// Finalized, serializable view for printing and export.
    pub fn summary(&self) -> AggregateSummary {
        let win_fractions = if self.trials == 0 {
            BTreeMap::new()
        } else {
            self.win_counts
                .iter()
                .map(|(name, count)| (name.clone(), *count as f64 / self.trials as f64))
                .collect()
        };
        AggregateSummary {
            trials: self.trials,
            win_counts: self.win_counts.clone(),
            win_fractions,
            winner_trait_means: self
                .winner_trait_means()
                .into_iter()
                .map(|(name, mean)| (name.to_string(), mean))
                .collect(),
        }
    }
}

/// Finalized aggregate statistics, ready for JSON or CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    pub trials: u64,
    pub win_counts: BTreeMap<String, u64>,
    pub win_fractions: BTreeMap<String, f64>,
    pub winner_trait_means: BTreeMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traits(power: f64) -> RiderTraits {
        RiderTraits {
            base_power_w: power,
            weight_kg: 70.0,
            cda_m2: 0.3,
            crr: 0.004,
            endurance_decay: 0.1,
            variance_coeff: 0.05,
        }
    }

    #[test]
    fn counts_and_trials_stay_conserved() {
        let mut agg = AggregateResult::default();
        agg.record_win("Anna", traits(300.0));
        agg.record_win("Bram", traits(280.0));
        agg.record_win("Anna", traits(300.0));

        assert_eq!(agg.trials(), 3);
        assert_eq!(agg.win_count("Anna"), 2);
        assert_eq!(agg.win_count("Bram"), 1);
        assert_eq!(agg.win_counts().values().sum::<u64>(), agg.trials());
    }

    #[test]
    fn trait_means_pool_across_winning_instances() {
        let mut agg = AggregateResult::default();
        agg.record_win("Anna", traits(300.0));
        agg.record_win("Bram", traits(280.0));

        let means = agg.winner_trait_means();
        assert!((means["base_power_w"] - 290.0).abs() < 1e-12);
        assert!((means["weight_kg"] - 70.0).abs() < 1e-12);
    }

    #[test]
    fn empty_aggregate_has_no_means() {
        let agg = AggregateResult::default();
        assert_eq!(agg.trials(), 0);
        assert!(agg.winner_trait_means().is_empty());
        let summary = agg.summary();
        assert!(summary.win_fractions.is_empty());
        assert!(summary.winner_trait_means.is_empty());
    }

    #[test]
    fn summary_fractions_sum_to_one() {
        let mut agg = AggregateResult::default();
        for _ in 0..7 {
            agg.record_win("Anna", traits(300.0));
        }
        for _ in 0..3 {
            agg.record_win("Bram", traits(280.0));
        }
        let total: f64 = agg.summary().win_fractions.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
}
