pub mod body;
pub mod forces;
pub mod integrators;
pub mod math;
pub mod system;
