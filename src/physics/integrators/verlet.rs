//! Position (Störmer) Verlet integration method

use super::{Integrator, debug_assert_bound};
use crate::physics::body::Body;
use crate::physics::math::{Scalar, Vector};

/// Position Verlet integrator
///
/// A second-order, time-reversible two-step method. It keeps two history
/// slots: slot 0 is the present and slot 1 is the state one step earlier.
/// Velocity is never integrated, only estimated from positions:
///
/// ```text
/// x(t+dt) = 2 x(t) - x(t-dt) + a(t) * dt²
/// v       = (x(t+dt) - x(t-dt)) / (2 dt)
/// ```
///
/// # Velocity lag
///
/// The central difference above is the velocity at `t`, the sample that
/// becomes [`Body::before`]`(1)` once the step is committed. It is stored as
/// the velocity of the new present state, so the velocity read from
/// [`Body::now`] lags the position by one step. Pair `before(1).position`
/// with `now().velocity` when a consistent sample is needed.
///
/// # Seeding
///
/// The first step reads two positions, so both slots must be seeded before
/// stepping: [`Body::set_now`] plus [`Body::set_before`], or [`Body::fill`]
/// for a body starting at rest.
///
/// # Properties
///
/// | Property      | Value                          |
/// |---------------|--------------------------------|
/// | Order         | 2 (4 locally)                  |
/// | History slots | 2 (present, one step before)   |
/// | Symplectic    | Yes                            |
/// | Energy drift  | Bounded oscillation            |
#[derive(Debug, Clone, Copy, Default)]
pub struct Verlet;

impl Integrator for Verlet {
    fn clone_box(&self) -> Box<dyn Integrator> {
        Box::new(*self)
    }

    fn state_depth(&self) -> usize {
        2
    }

    fn current_index(&self) -> usize {
        0
    }

    fn integrate(&self, body: &mut Body, acceleration: Vector, dt: Scalar) {
        debug_assert_bound(self, body);

        let past = body.before(1).position;
        let now = body.now().position;
        let next = 2.0 * now - past + acceleration * (dt * dt);

        body.shift(next, Vector::ZERO);
        body.set_now(next, (next - past) / (2.0 * dt));
    }

    fn convergence_order(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "verlet"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["position_verlet", "stormer_verlet"]
    }
}
