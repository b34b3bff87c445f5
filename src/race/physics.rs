//! Road-cycling force model in 1-D. All quantities use SI units. The formulas
//! are simplified but capture the primary resistive forces on a rider:
//! aerodynamic drag, rolling resistance, and the gravitational component
//! along the slope.

pub const AIR_DENSITY: f64 = 1.226; // kg/m^3 at sea level
pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const DRIVETRAIN_EFFICIENCY: f64 = 0.975; // fraction of power reaching the wheel

/// Total resistive force (N) at ground speed `speed`.
///
/// Aerodynamic drag is `0.5 * rho * CdA * v^2`. Rolling resistance is
/// `m * g * Crr` scaled by the segment surface factor (rough surfaces raise
/// it multiplicatively). The grade term uses the small-angle approximations
/// `cos(theta) ~ 1` and `sin(theta) ~ gradient`, so it is negative downhill.
pub fn resistive_force(
    speed: f64,
    gradient: f64,
    surface_factor: f64,
    mass_kg: f64,
    cda_m2: f64,
    crr: f64,
) -> f64 {
    let aero = 0.5 * AIR_DENSITY * cda_m2 * speed * speed;
    let rolling = mass_kg * GRAVITY * crr * surface_factor;
    let grade = mass_kg * GRAVITY * gradient;
    aero + rolling + grade
}

/// Steady-state speed (m/s) at which `power_w` balances the resistive forces:
/// `power * efficiency = v * F(v)`.
///
/// For positive power the demand curve `v * F(v)` crosses the target exactly
/// once (on a descent it dips below zero first, then the aero term takes
/// over), so a bracketed bisection finds the unique root without derivative
/// bookkeeping.
pub fn steady_state_speed(
    power_w: f64,
    gradient: f64,
    surface_factor: f64,
    mass_kg: f64,
    cda_m2: f64,
    crr: f64,
) -> f64 {
    let target = power_w * DRIVETRAIN_EFFICIENCY;
    let demand =
        |v: f64| v * resistive_force(v, gradient, surface_factor, mass_kg, cda_m2, crr);

    let mut hi = 1.0;
    while demand(hi) < target && hi < 1024.0 {
        hi *= 2.0;
    }
    let mut lo = 0.0;
    for _ in 0..64 {
        let mid = 0.5 * (lo + hi);
        if demand(mid) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASS: f64 = 75.0;
    const CDA: f64 = 0.3;
    const CRR: f64 = 0.004;

    #[test]
    fn solved_speed_balances_power() {
        let v = steady_state_speed(300.0, 0.0, 1.0, MASS, CDA, CRR);
        let demand = v * resistive_force(v, 0.0, 1.0, MASS, CDA, CRR);
        assert!((demand - 300.0 * DRIVETRAIN_EFFICIENCY).abs() < 1e-6);
        // ~40 km/h on the flat at 300 W is the plausibility check.
        assert!(v > 10.0 && v < 13.0, "flat speed {v}");
    }

    #[test]
    fn steeper_gradient_is_slower() {
        let flat = steady_state_speed(300.0, 0.0, 1.0, MASS, CDA, CRR);
        let climb = steady_state_speed(300.0, 0.05, 1.0, MASS, CDA, CRR);
        let wall = steady_state_speed(300.0, 0.12, 1.0, MASS, CDA, CRR);
        assert!(climb < flat);
        assert!(wall < climb);
    }

    #[test]
    fn descent_is_faster_than_flat() {
        let flat = steady_state_speed(250.0, 0.0, 1.0, MASS, CDA, CRR);
        let descent = steady_state_speed(250.0, -0.04, 1.0, MASS, CDA, CRR);
        assert!(descent > flat);
    }

    #[test]
    fn rough_surface_is_slower() {
        let smooth = steady_state_speed(300.0, 0.0, 1.0, MASS, CDA, CRR);
        let gravel = steady_state_speed(300.0, 0.0, 3.0, MASS, CDA, CRR);
        assert!(gravel < smooth);
    }

    #[test]
    fn more_power_is_faster() {
        let low = steady_state_speed(200.0, 0.03, 1.0, MASS, CDA, CRR);
        let high = steady_state_speed(350.0, 0.03, 1.0, MASS, CDA, CRR);
        assert!(high > low);
    }
}
