// src/math/mod.rs

pub mod integrator;

pub use integrator::integrate_axis;
pub use integrator::AxisState;
