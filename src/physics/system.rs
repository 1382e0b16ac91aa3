//! A set of bodies advanced together under one force and one integrator

use crate::physics::body::Body;
use crate::physics::forces::Force;
use crate::physics::integrators::Integrator;
use crate::physics::math::{Scalar, Vector};
use bevy::log::{debug, trace};

/// Bodies, the integrator they are bound to and the force acting on them
///
/// Every body is created by the system with the system's integrator, so a
/// body's history always has the shape its integrator expects.
///
/// [`System::step`] works in two phases. It first evaluates the acceleration
/// of every body against the unmodified state of the whole system, then
/// integrates each body with its own acceleration. No body ever sees a
/// neighbour that has already been advanced within the same step.
#[derive(Debug)]
pub struct System {
    integrator: Box<dyn Integrator>,
    bodies: Vec<Body>,
    force: Option<Force>,
    accelerations: Vec<Vector>,
    time: Scalar,
    steps: u64,
}

impl System {
    /// `body_count` bodies of unit mass at rest at the origin, no force.
    pub fn new(integrator: Box<dyn Integrator>, body_count: usize) -> Self {
        debug!(
            "creating system of {} bodies with {} integrator",
            body_count,
            integrator.name()
        );

        let bodies = (0..body_count)
            .map(|_| Body::new(integrator.as_ref(), 1.0))
            .collect();

        Self {
            integrator,
            bodies,
            force: None,
            accelerations: vec![Vector::ZERO; body_count],
            time: 0.0,
            steps: 0,
        }
    }

    pub fn set_force(&mut self, force: Force) {
        debug!("setting force with {} term(s)", force.terms().len());
        self.force = Some(force);
    }

    /// Sum `force` with the current force, or set it if there is none.
    pub fn add_force(&mut self, force: Force) {
        let combined = match self.force.take() {
            Some(existing) => existing + force,
            None => force,
        };
        self.set_force(combined);
    }

    pub fn force(&self) -> Option<&Force> {
        self.force.as_ref()
    }

    /// Remove the force; bodies move freely afterwards.
    pub fn clear_force(&mut self) {
        debug!("clearing force");
        self.force = None;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> &Body {
        self.check_index(index);
        &self.bodies[index]
    }

    /// Mutable access for seeding positions, velocities and masses.
    pub fn body_mut(&mut self, index: usize) -> &mut Body {
        self.check_index(index);
        &mut self.bodies[index]
    }

    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }

    /// Advance every body by `dt`.
    ///
    /// # Panics
    ///
    /// If `dt` is not positive and finite.
    pub fn step(&mut self, dt: Scalar) {
        assert!(
            dt > 0.0 && dt.is_finite(),
            "time step must be positive and finite, got {dt}"
        );

        match &self.force {
            Some(force) => {
                for (index, acceleration) in self.accelerations.iter_mut().enumerate() {
                    *acceleration = force.acceleration(&self.bodies, index);
                }
            }
            None => self.accelerations.fill(Vector::ZERO),
        }

        for (body, &acceleration) in self.bodies.iter_mut().zip(&self.accelerations) {
            self.integrator.integrate(body, acceleration, dt);
        }

        self.time += dt;
        self.steps += 1;
        trace!("step {} complete, t = {}", self.steps, self.time);
    }

    /// Call [`System::step`] `steps` times.
    pub fn run(&mut self, dt: Scalar, steps: usize) {
        for _ in 0..steps {
            self.step(dt);
        }
    }

    /// Simulated time elapsed over all steps
    pub fn time(&self) -> Scalar {
        self.time
    }

    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Σ ½ m v² over the current state of every body
    ///
    /// With [`crate::physics::integrators::Verlet`] the current velocity lags
    /// the current position by one step.
    pub fn kinetic_energy(&self) -> Scalar {
        self.bodies
            .iter()
            .map(|body| 0.5 * body.mass() * body.now().velocity.length_squared())
            .sum()
    }

    /// Σ m v over the current state of every body
    pub fn total_momentum(&self) -> Vector {
        self.bodies
            .iter()
            .map(|body| body.mass() * body.now().velocity)
            .sum()
    }

    fn check_index(&self, index: usize) {
        assert!(
            index < self.bodies.len(),
            "body index {index} out of range for a system of {} bodies",
            self.bodies.len()
        );
    }
}
