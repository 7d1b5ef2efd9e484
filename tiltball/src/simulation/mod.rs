// src/simulation/mod.rs

pub mod csv;
pub mod framework;
pub mod load_parameters;
pub mod publisher;
