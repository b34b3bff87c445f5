//! Random rider fields: each trait is drawn from a bounded uniform range, so
//! a generated field represents a population archetype rather than named
//! individuals. Sampled riders go through the same validation as hand-built
//! ones.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::race::rider::{Rider, RiderTraits};

/// Closed interval a trait is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitRange {
    pub min: f64,
    pub max: f64,
}

impl TraitRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, trait_name: &str) -> Result<(), SimError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SimError::Scenario(format!(
                "generator range for {trait_name} is degenerate ({}..{})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

fn default_power_range() -> TraitRange {
    TraitRange::new(280.0, 360.0)
}
fn default_weight_range() -> TraitRange {
    TraitRange::new(73.0, 88.0)
}
fn default_cda_range() -> TraitRange {
    TraitRange::new(0.25, 0.35)
}
fn default_crr_range() -> TraitRange {
    TraitRange::new(0.003, 0.005)
}
fn default_endurance_range() -> TraitRange {
    TraitRange::new(0.05, 0.15)
}
fn default_variance_range() -> TraitRange {
    TraitRange::new(0.03, 0.12)
}

/// Per-trait uniform ranges for sampling a field of riders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderGenerator {
    #[serde(default = "default_power_range")]
    pub base_power_w: TraitRange,
    #[serde(default = "default_weight_range")]
    pub weight_kg: TraitRange,
    #[serde(default = "default_cda_range")]
    pub cda_m2: TraitRange,
    #[serde(default = "default_crr_range")]
    pub crr: TraitRange,
    #[serde(default = "default_endurance_range")]
    pub endurance_decay: TraitRange,
    #[serde(default = "default_variance_range")]
    pub variance_coeff: TraitRange,
}

impl Default for RiderGenerator {
    fn default() -> Self {
        Self {
            base_power_w: default_power_range(),
            weight_kg: default_weight_range(),
            cda_m2: default_cda_range(),
            crr: default_crr_range(),
            endurance_decay: default_endurance_range(),
            variance_coeff: default_variance_range(),
        }
    }
}

impl RiderGenerator {
    fn check_ranges(&self) -> Result<(), SimError> {
        self.base_power_w.check("base_power_w")?;
        self.weight_kg.check("weight_kg")?;
        self.cda_m2.check("cda_m2")?;
        self.crr.check("crr")?;
        self.endurance_decay.check("endurance_decay")?;
        self.variance_coeff.check("variance_coeff")?;
        Ok(())
    }

    /// Sample one rider named `Rider_<index>`. Out-of-range draws are caught
    /// by rider validation like any other construction error.
    pub fn sample_rider(&self, index: usize, rng: &mut impl Rng) -> Result<Rider, SimError> {
        Rider::new(
            format!("Rider_{index}"),
            RiderTraits {
                base_power_w: self.base_power_w.sample(rng),
                weight_kg: self.weight_kg.sample(rng),
                cda_m2: self.cda_m2.sample(rng),
                crr: self.crr.sample(rng),
                endurance_decay: self.endurance_decay.sample(rng),
                variance_coeff: self.variance_coeff.sample(rng),
            },
        )
    }

    /// Sample a full field of `count` riders, named `Rider_0..Rider_{count-1}`.
    pub fn sample_field(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<Rider>, SimError> {
        if count == 0 {
            return Err(SimError::Scenario("generated field needs at least one rider".to_string()));
        }
        self.check_ranges()?;
        (0..count).map(|index| self.sample_rider(index, rng)).collect()
    }
}
