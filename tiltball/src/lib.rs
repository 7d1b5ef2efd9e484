// src/lib.rs

pub mod config;
pub mod error;
pub mod math;
pub mod models;
pub mod simulation;

pub use error::SimulationError;
pub use models::ball::{Ball, IntegrationPhase};
pub use models::controller::BallController;
pub use models::sensor::{SensorEvent, SensorKind};
pub use simulation::publisher::PositionPublisher;
