//! Springdrift library
//!
//! A small deterministic N-body particle engine. Bodies keep a short history
//! of kinematic states sized by their integrator, forces compose by flat
//! summation and masking, and a [`System`] advances everything in a
//! gather-then-commit step.

pub mod config;
pub mod error;
pub mod physics;
pub mod prelude;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use physics::system::System;
