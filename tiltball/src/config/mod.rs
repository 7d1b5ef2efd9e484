// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::{ControllerParameters, FieldParameters};
pub use scenario::Scenario;
