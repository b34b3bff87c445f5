//! Rider identity and physiological traits. Construct, validate, freeze:
//! traits never change after [Rider::new], so riders can be shared read-only
//! across any number of trials.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Number of scalar traits per rider; matches [RiderTraits::as_pairs].
pub const TRAIT_COUNT: usize = 6;

/// Physiological trait set. Each value is bounded; out-of-range values are
/// rejected by [Rider::new] before any simulation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderTraits {
    /// Sustainable power on fresh legs (W).
    pub base_power_w: f64,
    /// System mass, rider plus bike (kg).
    pub weight_kg: f64,
    /// Effective aerodynamic drag area (m^2).
    pub cda_m2: f64,
    /// Rolling resistance coefficient on a reference surface.
    pub crr: f64,
    /// Fractional power fade over the full route distance; 0 = no fade.
    pub endurance_decay: f64,
    /// Sigma of the per-segment log-normal form draw; 0 = fully predictable.
    pub variance_coeff: f64,
}

impl RiderTraits {
    /// Trait values keyed by their canonical names, in a fixed order.
    pub fn as_pairs(&self) -> [(&'static str, f64); TRAIT_COUNT] {
        [
            ("base_power_w", self.base_power_w),
            ("weight_kg", self.weight_kg),
            ("cda_m2", self.cda_m2),
            ("crr", self.crr),
            ("endurance_decay", self.endurance_decay),
            ("variance_coeff", self.variance_coeff),
        ]
    }

    fn validate(&self, name: &str) -> Result<(), SimError> {
        let checks = [
            ("base_power_w", self.base_power_w, 0.0 < self.base_power_w && self.base_power_w <= 2500.0),
            ("weight_kg", self.weight_kg, 0.0 < self.weight_kg && self.weight_kg <= 250.0),
            ("cda_m2", self.cda_m2, 0.0 < self.cda_m2 && self.cda_m2 <= 2.0),
            ("crr", self.crr, 0.0 < self.crr && self.crr <= 0.05),
            ("endurance_decay", self.endurance_decay, (0.0..1.0).contains(&self.endurance_decay)),
            ("variance_coeff", self.variance_coeff, (0.0..=0.5).contains(&self.variance_coeff)),
        ];
        for (trait_name, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(SimError::InvalidRider {
                    name: name.to_string(),
                    reason: format!("{trait_name} = {value} is out of range"),
                });
            }
        }
        Ok(())
    }
}

/// A named, validated rider. Immutable for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rider {
    name: String,
    traits: RiderTraits,
}

impl Rider {
    pub fn new(name: impl Into<String>, traits: RiderTraits) -> Result<Self, SimError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SimError::InvalidRider {
                name,
                reason: "name must not be empty".to_string(),
            });
        }
        traits.validate(&name)?;
        Ok(Self { name, traits })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn traits(&self) -> RiderTraits {
        self.traits
    }
}
