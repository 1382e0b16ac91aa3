//! Numerical integration methods for the particle engine
//!
//! Unlike integrators that own a position/velocity pair, these work directly
//! on a [`Body`] and its history. Each method states how many past samples it
//! needs, and bodies are allocated to match. Two methods ship with the crate:
//!
//! - [`ExplicitEuler`]: one slot, first order, energy grows over time
//! - [`Verlet`]: two slots, second order, symplectic
//!
//! Both are registered in [`IntegratorRegistry`] for lookup by name.

use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};
use std::fmt;

pub mod explicit_euler;
pub mod registry;
pub mod verlet;

pub use explicit_euler::ExplicitEuler;
pub use registry::IntegratorRegistry;
pub use verlet::Verlet;

/// A stateless time-stepping strategy
///
/// An integrator decides how much history a [`Body`] has to carry and which
/// history slot is the present, and it advances one body at a time given the
/// acceleration computed for that body. Bodies must be created with the
/// integrator that later steps them, see [`Body::new`].
pub trait Integrator: Send + Sync {
    /// Clone this integrator into a new box
    ///
    /// Integrators are stateless, so this only allocates a new box.
    fn clone_box(&self) -> Box<dyn Integrator>;

    /// Number of history slots each body keeps
    ///
    /// Read once by [`Body::new`]. Must be at least 1.
    fn state_depth(&self) -> usize;

    /// History slot holding the present state
    ///
    /// Slot 0 is the newest sample, so slots above this index are the past
    /// and slots below it are the future.
    fn current_index(&self) -> usize;

    /// Advance a single body by one time step
    ///
    /// # Arguments
    /// * `body` - Body created for this integrator
    /// * `acceleration` - Acceleration evaluated at the pre-step state
    /// * `dt` - Time step
    ///
    /// The new state is committed through [`Body::shift`], so the oldest
    /// sample is dropped and the history never grows.
    fn integrate(&self, body: &mut Body, acceleration: Vector, dt: Scalar);

    /// Global order of accuracy
    ///
    /// The error at a fixed time is expected to shrink like `dt^order`. The
    /// accuracy tests measure it; nothing enforces it.
    fn convergence_order(&self) -> usize;

    /// Canonical name used in configuration files
    fn name(&self) -> &'static str;

    /// Alternative names accepted by the registry
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

impl Clone for Box<dyn Integrator> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl fmt::Debug for dyn Integrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integrator")
            .field("name", &self.name())
            .field("state_depth", &self.state_depth())
            .field("current_index", &self.current_index())
            .finish()
    }
}

#[inline]
pub(crate) fn debug_assert_bound(integrator: &dyn Integrator, body: &Body) {
    debug_assert!(
        body.state_depth() == integrator.state_depth()
            && body.current_index() == integrator.current_index(),
        "body with {} slots (current {}) was not created for integrator '{}'",
        body.state_depth(),
        body.current_index(),
        integrator.name()
    );
}
