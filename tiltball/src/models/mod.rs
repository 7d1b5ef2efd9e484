// src/models/mod.rs

pub mod ball;
pub mod controller;
pub mod sensor;
