//! Monte Carlo road-race simulator: rider physiology and mixed-terrain
//! routes in, win-rate statistics out.
//!
//! Riders and routes are validated value objects, frozen at construction. A
//! single trial ([race::simulate_race]) sends every rider over the route
//! independently with fresh per-segment form draws; the aggregation layer
//! ([montecarlo::run_monte_carlo]) repeats that over independently seeded
//! trials and pools winners into win counts and trait means.

pub mod cli;
pub mod error;
pub mod montecarlo;
pub mod parallel;
pub mod race;
pub mod scenario;

pub use error::SimError;
pub use montecarlo::{
    run_monte_carlo, run_monte_carlo_parallel, AggregateResult, AggregateSummary, Field,
    RiderGenerator, TraitRange,
};
pub use race::{simulate_race, Finish, Rider, RiderTraits, Route, Segment, TrialResult};
