//! Point masses and their bounded state history

use crate::physics::integrators::Integrator;
use crate::physics::math::{Scalar, Vector};

/// One sample of a body's trajectory
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KinematicState {
    pub position: Vector,
    pub velocity: Vector,
}

impl KinematicState {
    /// A body sitting at the origin
    pub const REST: Self = Self {
        position: Vector::ZERO,
        velocity: Vector::ZERO,
    };

    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self { position, velocity }
    }
}

/// A simulated point mass
///
/// The history holds exactly as many samples as the integrator that created
/// the body asks for. Slot 0 is always the newest sample and higher slots are
/// older; which slot counts as "now" is also decided by the integrator.
///
/// Relative accessors take offsets counted in whole steps from "now". Reading
/// or writing outside the allocated history is a contract violation and
/// panics; offsets are never clamped or wrapped.
///
/// Stepping a body with an integrator other than the one it was created for
/// is undefined. [`System`](crate::physics::system::System) rules this out by
/// creating every body with its own integrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: Scalar,
    history: Vec<KinematicState>,
    current: usize,
}

impl Body {
    /// Create a body at rest with history sized for `integrator`.
    pub fn new(integrator: &dyn Integrator, mass: Scalar) -> Self {
        let depth = integrator.state_depth();
        let current = integrator.current_index();
        assert!(depth > 0, "integrator '{}' keeps no state", integrator.name());
        assert!(
            current < depth,
            "integrator '{}' puts the current state at slot {current} of {depth}",
            integrator.name()
        );

        let mut body = Self {
            mass: 1.0,
            history: vec![KinematicState::REST; depth],
            current,
        };
        body.set_mass(mass);
        body
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Panics unless `mass` is positive and finite.
    pub fn set_mass(&mut self, mass: Scalar) {
        assert!(
            mass > 0.0 && mass.is_finite(),
            "body mass must be positive and finite, got {mass}"
        );
        self.mass = mass;
    }

    /// Number of samples kept
    #[inline]
    pub fn state_depth(&self) -> usize {
        self.history.len()
    }

    /// Slot holding the present state
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// All samples, newest first
    pub fn history(&self) -> &[KinematicState] {
        &self.history
    }

    /// Push a new state into slot 0, discarding the oldest one.
    pub fn shift(&mut self, position: Vector, velocity: Vector) {
        self.history.rotate_right(1);
        self.history[0] = KinematicState::new(position, velocity);
    }

    #[inline]
    pub fn now(&self) -> KinematicState {
        self.history[self.current]
    }

    /// Overwrite the present state. Meant for seeding initial conditions.
    pub fn set_now(&mut self, position: Vector, velocity: Vector) {
        self.history[self.current] = KinematicState::new(position, velocity);
    }

    /// State `k` steps before now.
    pub fn before(&self, k: usize) -> KinematicState {
        self.history[self.expect_slot(-(k as i128))]
    }

    /// State `k` steps after now.
    pub fn after(&self, k: usize) -> KinematicState {
        self.history[self.expect_slot(k as i128)]
    }

    /// State at a signed step offset from now (negative is the past).
    pub fn relative(&self, offset: isize) -> KinematicState {
        self.history[self.expect_slot(offset as i128)]
    }

    /// Like [`Body::relative`] but returns `None` outside the history.
    pub fn get_relative(&self, offset: isize) -> Option<KinematicState> {
        self.slot(offset as i128).map(|slot| self.history[slot])
    }

    pub fn set_before(&mut self, k: usize, position: Vector, velocity: Vector) {
        let slot = self.expect_slot(-(k as i128));
        self.history[slot] = KinematicState::new(position, velocity);
    }

    pub fn set_relative(&mut self, offset: isize, position: Vector, velocity: Vector) {
        let slot = self.expect_slot(offset as i128);
        self.history[slot] = KinematicState::new(position, velocity);
    }

    /// Write the same state into every slot.
    ///
    /// For multi-step integrators this seeds a body that has been sitting
    /// still at `position`.
    pub fn fill(&mut self, position: Vector, velocity: Vector) {
        self.history.fill(KinematicState::new(position, velocity));
    }

    /// Offsets are `i128`: every `usize` and `isize` step count fits exactly.
    fn slot(&self, offset: i128) -> Option<usize> {
        let slot = self.current as i128 - offset;
        (0..self.history.len() as i128)
            .contains(&slot)
            .then_some(slot as usize)
    }

    fn expect_slot(&self, offset: i128) -> usize {
        self.slot(offset).unwrap_or_else(|| {
            panic!(
                "history offset {offset} out of range: body keeps {} slots with the current state at slot {}",
                self.history.len(),
                self.current
            )
        })
    }
}
