//! Springdrift prelude module
//!
//! Re-exports the types needed to build and step a system.

pub use crate::physics::math::{Scalar, Vector};

pub use crate::config::SimulationConfig;
pub use crate::error::SimulationError;

pub use crate::physics::body::{Body, KinematicState};
pub use crate::physics::forces::{AccelerationField, Force, Hooke, Spring};
pub use crate::physics::integrators::{ExplicitEuler, Integrator, IntegratorRegistry, Verlet};
pub use crate::physics::system::System;
