//! Fleet Empathy Engine simulation core.
//!
//! Models a fleet of vehicles donating idle compute hour by hour, and a
//! learning process whose success probability improves as it absorbs
//! failures ("edge cases"). Everything is driven from a single seeded RNG so a
//! run is reproducible from its [`SimConfig`].

pub mod config;
pub mod error;
pub mod idle;
pub mod learning;
pub mod series;
pub mod simulation;
pub mod summary;

pub use config::SimConfig;
pub use error::SimError;
pub use learning::{LearningState, TaskOutcome};
pub use series::TimeSeries;
pub use simulation::{DayReport, Simulation, SimulationRun};
pub use summary::Summary;
