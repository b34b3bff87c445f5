pub mod engine;
pub mod physics;
pub mod physiology;
pub mod rider;
pub mod rng;
pub mod route;

pub use engine::{simulate_race, Finish, TrialResult};
pub use physiology::{faded_power, segment_speed};
pub use rider::{Rider, RiderTraits, TRAIT_COUNT};
pub use rng::stream_seed;
pub use route::{Route, Segment};
