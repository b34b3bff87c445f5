//! Route model: an ordered sequence of terrain segments. Routes are
//! validated at construction and never mutated afterwards, so one route can
//! be shared read-only by every rider in every trial of a run.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// One terrain sub-section with fixed physical parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Length in meters.
    pub distance_m: f64,
    /// Road gradient as a decimal (0.05 == 5%), signed.
    pub gradient: f64,
    /// Multiplier on rolling resistance; 1.0 = reference tarmac.
    pub surface_factor: f64,
}

impl Segment {
    /// Segment on reference tarmac.
    pub fn new(distance_m: f64, gradient: f64) -> Self {
        Self { distance_m, gradient, surface_factor: 1.0 }
    }

    pub fn with_surface(distance_m: f64, gradient: f64, surface_factor: f64) -> Self {
        Self { distance_m, gradient, surface_factor }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    segments: Vec<Segment>,
    total_distance_m: f64,
}

impl Route {
    /// Validate and freeze a segment list. Empty routes, non-positive
    /// distances or surface factors, and gradients outside the small-angle
    /// range are construction errors.
    pub fn new(segments: Vec<Segment>) -> Result<Self, SimError> {
        if segments.is_empty() {
            return Err(SimError::InvalidRoute("route has no segments".to_string()));
        }
        for (index, segment) in segments.iter().enumerate() {
            if !segment.distance_m.is_finite() || segment.distance_m <= 0.0 {
                return Err(SimError::InvalidRoute(format!(
                    "segment {index} has non-positive distance {}",
                    segment.distance_m
                )));
            }
            if !segment.surface_factor.is_finite() || segment.surface_factor <= 0.0 {
                return Err(SimError::InvalidRoute(format!(
                    "segment {index} has non-positive surface factor {}",
                    segment.surface_factor
                )));
            }
            if !segment.gradient.is_finite() || segment.gradient.abs() > 0.35 {
                return Err(SimError::InvalidRoute(format!(
                    "segment {index} gradient {} outside +/-0.35",
                    segment.gradient
                )));
            }
        }
        let total_distance_m = segments.iter().map(|s| s.distance_m).sum();
        Ok(Self { segments, total_distance_m })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Sum of segment distances; always > 0 for a constructed route.
    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    /// Built-in mixed-terrain demo route: flat run-in, a 3% rise, a shallow
    /// descent, a 5% climb, and a flat finish.
    pub fn default_demo() -> Self {
        let segments = vec![
            Segment::new(3000.0, 0.0),
            Segment::new(2000.0, 0.03),
            Segment::new(3000.0, -0.01),
            Segment::new(2000.0, 0.05),
            Segment::new(2000.0, 0.0),
        ];
        Self::new(segments).expect("demo route segments are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_distance_is_segment_sum() {
        let route = Route::new(vec![Segment::new(1000.0, 0.0), Segment::new(500.0, 0.04)])
            .expect("valid route");
        assert!((route.total_distance_m() - 1500.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_empty_route() {
        assert!(matches!(Route::new(vec![]), Err(SimError::InvalidRoute(_))));
    }

    #[test]
    fn rejects_non_positive_distance() {
        let zero = Route::new(vec![Segment::new(0.0, 0.0)]);
        let negative = Route::new(vec![Segment::new(-10.0, 0.0)]);
        assert!(matches!(zero, Err(SimError::InvalidRoute(_))));
        assert!(matches!(negative, Err(SimError::InvalidRoute(_))));
    }

    #[test]
    fn rejects_degenerate_surface_and_gradient() {
        let surface = Route::new(vec![Segment::with_surface(100.0, 0.0, 0.0)]);
        assert!(matches!(surface, Err(SimError::InvalidRoute(_))));

        let cliff = Route::new(vec![Segment::new(100.0, 0.9)]);
        assert!(matches!(cliff, Err(SimError::InvalidRoute(_))));
    }

    #[test]
    fn demo_route_is_valid_and_ordered() {
        let route = Route::default_demo();
        assert_eq!(route.segments().len(), 5);
        assert!(route.total_distance_m() > 0.0);
        assert_eq!(route.segments()[1].gradient, 0.03);
    }
}
