//! Explicit Euler integration method (forward Euler)
//!
//! Mainly useful as a baseline: it is first order and its energy drifts on
//! conservative systems, which makes it a good foil for [`super::Verlet`].

use super::{Integrator, debug_assert_bound};
use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

/// Explicit Euler integrator (forward Euler method)
///
/// Keeps a single history slot. Both updates read the state from the start
/// of the step:
///
/// ```text
/// v(t+dt) = v(t) + a(t) * dt
/// x(t+dt) = x(t) + v(t) * dt
/// ```
///
/// The position update uses the velocity from BEFORE the step. Using the
/// freshly updated velocity instead would turn this into symplectic Euler,
/// which is a different method with different results.
///
/// # Properties
///
/// | Property      | Value                      |
/// |---------------|----------------------------|
/// | Order         | 1                          |
/// | History slots | 1 (current state only)     |
/// | Symplectic    | No                         |
/// | Energy drift  | Grows with simulated time  |
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn state_depth(&self) -> usize {
        1
    }

    fn current_index(&self) -> usize {
        0
    }

    fn integrate(&self, body: &mut Body, acceleration: Vector, dt: Scalar) {
        debug_assert_bound(self, body);

        let now = body.now();

        let velocity = now.velocity + acceleration * dt;
        let position = now.position + now.velocity * dt;

        body.shift(position, velocity);
    }

    fn convergence_order(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "explicit_euler"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["euler", "forward_euler"]
    }
}
