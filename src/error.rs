//! Recoverable errors
//!
//! Contract violations (out-of-range body indices or history offsets,
//! non-positive masses or time steps) panic at the call site instead.

use crate::physics::math::Scalar;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Configuration could not be read or parsed
    ConfigLoad(String),
    /// Configuration could not be written
    ConfigSave(String),
    /// Unknown integrator name
    InvalidIntegrator(String),
    /// Time step that is not positive and finite
    InvalidTimeStep(Scalar),
    /// Mass that is not positive and finite
    InvalidMass(Scalar),
    /// Spring matrix row whose length differs from the number of rows
    SpringMatrixShape {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Spring connecting a body to itself
    SelfSpring(usize),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            SimulationError::ConfigSave(msg) => write!(f, "Failed to save configuration: {msg}"),
            SimulationError::InvalidIntegrator(msg) => write!(f, "Invalid integrator: {msg}"),
            SimulationError::InvalidTimeStep(dt) => {
                write!(f, "Time step must be positive and finite, got {dt}")
            }
            SimulationError::InvalidMass(mass) => {
                write!(f, "Body mass must be positive and finite, got {mass}")
            }
            SimulationError::SpringMatrixShape { row, len, expected } => write!(
                f,
                "Spring matrix must be square: row {row} has {len} entries, expected {expected}"
            ),
            SimulationError::SelfSpring(index) => {
                write!(f, "Body {index} cannot be connected to itself by a spring")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
