pub mod aggregate;
pub mod generator;
pub mod runner;

pub use aggregate::{AggregateResult, AggregateSummary};
pub use generator::{RiderGenerator, TraitRange};
pub use runner::{run_monte_carlo, run_monte_carlo_parallel, Field};
