//! Converts rider traits and terrain into an effective segment speed. The
//! stochastic piece is a multiplicative form factor drawn fresh for every
//! rider-segment pair; everything downstream is the deterministic force
//! balance in [crate::race::physics].

use rand::Rng;
use rand_distr::{Distribution, LogNormal};

use crate::error::SimError;
use crate::race::physics;
use crate::race::rider::{Rider, RiderTraits};
use crate::race::route::Segment;

/// Mean sustainable power after fading, where `progress` is the fraction of
/// the route already covered in [0, 1]. Linear fade scaled by the rider's
/// endurance-decay trait; decay < 1 keeps the result strictly positive.
pub fn faded_power(traits: &RiderTraits, progress: f64) -> f64 {
    traits.base_power_w * (1.0 - traits.endurance_decay * progress.clamp(0.0, 1.0))
}

/// Effective ground speed (m/s) for one segment traversal.
///
/// Power is the faded mean scaled by a log-normal form draw with sigma =
/// the rider's variance coefficient (median 1.0, strictly positive), then
/// converted to speed through the steady-state force balance. Deterministic
/// given a seeded `rng`; a non-finite or non-positive solve is reported as a
/// simulation invariant violation, never patched over.
pub fn segment_speed(
    rider: &Rider,
    segment: &Segment,
    progress: f64,
    rng: &mut impl Rng,
) -> Result<f64, SimError> {
    let traits = rider.traits();
    let form = LogNormal::new(0.0, traits.variance_coeff)
        .map_err(|err| {
            SimError::Simulation(format!("form distribution for `{}`: {err}", rider.name()))
        })?
        .sample(rng);
    let power_w = faded_power(&traits, progress) * form;

    let speed = physics::steady_state_speed(
        power_w,
        segment.gradient,
        segment.surface_factor,
        traits.weight_kg,
        traits.cda_m2,
        traits.crr,
    );
    if !speed.is_finite() || speed <= 0.0 {
        return Err(SimError::Simulation(format!(
            "non-positive speed {speed} for `{}` (power {power_w:.1} W, gradient {})",
            rider.name(),
            segment.gradient
        )));
    }
    Ok(speed)
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn rider(variance_coeff: f64) -> Rider {
        Rider::new(
            "Anna",
            RiderTraits {
                base_power_w: 300.0,
                weight_kg: 78.0,
                cda_m2: 0.3,
                crr: 0.004,
                endurance_decay: 0.1,
                variance_coeff,
            },
        )
        .expect("valid rider")
    }

    #[test]
    fn faded_power_declines_with_progress() {
        let traits = rider(0.0).traits();
        assert!(faded_power(&traits, 0.0) > faded_power(&traits, 0.5));
        assert!(faded_power(&traits, 0.5) > faded_power(&traits, 1.0));
        assert!(faded_power(&traits, 1.0) > 0.0);
    }

    #[test]
    fn zero_variance_rider_is_fully_repeatable() {
        let rider = rider(0.0);
        let segment = Segment::new(1000.0, 0.02);
        let mut rng_a = SmallRng::seed_from_u64(1);
        let mut rng_b = SmallRng::seed_from_u64(99);
        let a = segment_speed(&rider, &segment, 0.0, &mut rng_a).expect("speed");
        let b = segment_speed(&rider, &segment, 0.0, &mut rng_b).expect("speed");
        assert_eq!(a, b);
    }

    #[test]
    fn same_seed_same_speed() {
        let rider = rider(0.15);
        let segment = Segment::new(1000.0, 0.0);
        let a = segment_speed(&rider, &segment, 0.3, &mut SmallRng::seed_from_u64(5)).expect("a");
        let b = segment_speed(&rider, &segment, 0.3, &mut SmallRng::seed_from_u64(5)).expect("b");
        assert_eq!(a, b);
    }

    #[test]
    fn mean_speed_drops_on_steeper_gradient() {
        let rider = rider(0.2);
        let flat = Segment::new(1000.0, 0.0);
        let climb = Segment::new(1000.0, 0.06);
        let draws = 200;

        let mut flat_sum = 0.0;
        let mut climb_sum = 0.0;
        for draw in 0..draws {
            // Pair the draws seed-for-seed so only the gradient differs.
            flat_sum +=
                segment_speed(&rider, &flat, 0.0, &mut SmallRng::seed_from_u64(draw)).expect("flat");
            climb_sum += segment_speed(&rider, &climb, 0.0, &mut SmallRng::seed_from_u64(draw))
                .expect("climb");
        }
        assert!(climb_sum / (draws as f64) < flat_sum / draws as f64);
    }
}
