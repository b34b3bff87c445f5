//! Declarative scenario description: the field, the route, and the run
//! parameters. Specs are plain serde data; [ScenarioSpec::build] converts
//! them into validated domain values before anything simulates.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::montecarlo::generator::RiderGenerator;
use crate::montecarlo::runner::Field;
use crate::race::rider::{Rider, RiderTraits};
use crate::race::route::{Route, Segment};

fn default_trials() -> usize {
    100
}

fn default_surface_factor() -> f64 {
    1.0
}

fn default_field_size() -> usize {
    5
}

/// One route segment as written in a scenario file. Gradient defaults to
/// flat and surface factor to reference tarmac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub distance_m: f64,
    #[serde(default)]
    pub gradient: f64,
    #[serde(default = "default_surface_factor")]
    pub surface_factor: f64,
}

/// A named rider with explicit traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderSpec {
    pub name: String,
    #[serde(flatten)]
    pub traits: RiderTraits,
}

/// Randomly generated field: size plus optional range overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    #[serde(default = "default_field_size")]
    pub count: usize,
    #[serde(default)]
    pub ranges: RiderGenerator,
}

/// Full simulation scenario. Exactly one of `riders` and `generator` must
/// describe the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    #[serde(default = "default_trials")]
    pub trials: usize,
    #[serde(default)]
    pub seed: u64,
    pub route: Vec<SegmentSpec>,
    #[serde(default)]
    pub riders: Vec<RiderSpec>,
    #[serde(default)]
    pub generator: Option<GeneratorSpec>,
}

impl ScenarioSpec {
    /// Validate the spec into a simulation-ready field and route.
    pub fn build(&self) -> Result<(Field, Route), SimError> {
        let segments: Vec<Segment> = self
            .route
            .iter()
            .map(|spec| Segment::with_surface(spec.distance_m, spec.gradient, spec.surface_factor))
            .collect();
        let route = Route::new(segments)?;

        let field = match (&self.riders[..], &self.generator) {
            ([], None) => {
                return Err(SimError::Scenario(
                    "scenario needs either `riders` or a `generator`".to_string(),
                ))
            }
            (riders, None) => {
                let roster = riders
                    .iter()
                    .map(|spec| Rider::new(spec.name.clone(), spec.traits))
                    .collect::<Result<Vec<_>, _>>()?;
                Field::Roster(roster)
            }
            ([], Some(generator)) => Field::Generated {
                generator: generator.ranges,
                count: generator.count,
            },
            (_, Some(_)) => {
                return Err(SimError::Scenario(
                    "scenario must not combine `riders` with a `generator`".to_string(),
                ))
            }
        };
        Ok((field, route))
    }
}

/// Built-in scenario: five generated riders on the demo route, 100 trials.
pub fn demo_scenario() -> ScenarioSpec {
    let route = Route::default_demo()
        .segments()
        .iter()
        .map(|segment| SegmentSpec {
            distance_m: segment.distance_m,
            gradient: segment.gradient,
            surface_factor: segment.surface_factor,
        })
        .collect();
    ScenarioSpec {
        trials: default_trials(),
        seed: 42,
        route,
        riders: Vec::new(),
        generator: Some(GeneratorSpec {
            count: default_field_size(),
            ranges: RiderGenerator::default(),
        }),
    }
}
