//! Accuracy tests for numerical integrators
//!
//! Drives a full system (anchored spring, one moving body) against the
//! analytic harmonic oscillator and checks the observed order of convergence.

use springdrift::physics::forces::{Force, Hooke, Spring};
use springdrift::physics::integrators::{ExplicitEuler, Integrator, Verlet};
use springdrift::physics::math::{Scalar, Vector};
use springdrift::physics::system::System;

const PI: Scalar = std::f64::consts::PI;

/// Body 1 on a spring attached to a fixed body 0 at the origin
///
/// With displacement u = x - L0 and initial conditions u(0) = A, v(0) = 0:
/// u(t) = A * cos(ωt), ω = sqrt(K / M)
/// v(t) = -A * ω * sin(ωt)
struct HarmonicOscillator {
    stiffness: Scalar,
    mass: Scalar,
    rest_length: Scalar,
    amplitude: Scalar,
}

impl HarmonicOscillator {
    fn new() -> Self {
        Self {
            stiffness: 4.0 * PI * PI,
            mass: 1.0,
            rest_length: 1.0,
            amplitude: 0.5,
        }
    }

    fn omega(&self) -> Scalar {
        (self.stiffness / self.mass).sqrt()
    }

    /// Analytical position of the moving body at time t
    fn exact_position(&self, t: Scalar) -> Vector {
        let x = self.rest_length + self.amplitude * (self.omega() * t).cos();
        Vector::new(x, 0.0, 0.0)
    }

    /// Analytical velocity of the moving body at time t
    fn exact_velocity(&self, t: Scalar) -> Vector {
        let omega = self.omega();
        Vector::new(-self.amplitude * omega * (omega * t).sin(), 0.0, 0.0)
    }

    fn build(&self, integrator: Box<dyn Integrator>, dt: Scalar) -> System {
        let mut system = System::new(integrator, 2);

        let spring = Spring::new(self.stiffness, self.rest_length);
        let hooke = Hooke::new(2).with_spring(0, 1, spring);
        system.set_force(Force::masked(hooke.into(), [0]));

        let body = system.body_mut(1);
        body.set_mass(self.mass);
        body.set_now(self.exact_position(0.0), Vector::ZERO);
        if body.state_depth() > 1 {
            // Exact state one step in the past
            body.set_before(1, self.exact_position(-dt), Vector::ZERO);
        }

        system
    }
}

/// Position error of the moving body after `steps` steps of `dt`
fn position_error(integrator: Box<dyn Integrator>, dt: Scalar, steps: usize) -> Scalar {
    let oscillator = HarmonicOscillator::new();
    let mut system = oscillator.build(integrator, dt);

    system.run(dt, steps);

    let t = dt * steps as Scalar;
    (system.body(1).now().position - oscillator.exact_position(t)).length()
}

/// Velocity error of the moving body after `steps` steps of `dt`
///
/// The stored velocity describes the state `lag` steps before the current
/// position, so it is compared with the analytic velocity at that time.
fn velocity_error(integrator: Box<dyn Integrator>, dt: Scalar, steps: usize, lag: usize) -> Scalar {
    let oscillator = HarmonicOscillator::new();
    let mut system = oscillator.build(integrator, dt);

    system.run(dt, steps);

    let t = dt * (steps - lag) as Scalar;
    (system.body(1).now().velocity - oscillator.exact_velocity(t)).length()
}

const REFINEMENTS: [(Scalar, usize); 3] = [(0.001, 300), (0.0005, 600), (0.00025, 1200)];

/// Position errors at t = 0.3 for dt, dt/2, dt/4
fn error_sequence(integrator: &dyn Integrator) -> Vec<Scalar> {
    REFINEMENTS
        .into_iter()
        .map(|(dt, steps)| position_error(integrator.clone_box(), dt, steps))
        .collect()
}

/// Velocity errors at t = 0.3 for dt, dt/2, dt/4
fn velocity_error_sequence(integrator: &dyn Integrator, lag: usize) -> Vec<Scalar> {
    REFINEMENTS
        .into_iter()
        .map(|(dt, steps)| velocity_error(integrator.clone_box(), dt, steps, lag))
        .collect()
}

fn assert_convergence_ratio(errors: &[Scalar], expected: std::ops::Range<Scalar>, label: &str) {
    for pair in errors.windows(2) {
        let ratio = pair[0] / pair[1];
        assert!(
            expected.contains(&ratio),
            "{label} error ratio out of {expected:?} when dt halves, got {ratio} ({errors:?})"
        );
    }
}

#[test]
fn test_anchor_stays_fixed() {
    let oscillator = HarmonicOscillator::new();
    let mut system = oscillator.build(Box::new(Verlet), 0.01);

    system.run(0.01, 250);

    assert_eq!(system.body(0).now().position, Vector::ZERO);
    assert_eq!(system.body(0).now().velocity, Vector::ZERO);
}

#[test]
fn test_explicit_euler_first_order_convergence() {
    let errors = error_sequence(&ExplicitEuler);
    assert_convergence_ratio(&errors, 1.8..2.2, "Explicit Euler position");
}

#[test]
fn test_verlet_second_order_convergence() {
    let errors = error_sequence(&Verlet);
    assert_convergence_ratio(&errors, 3.5..4.5, "Verlet position");
}

#[test]
fn test_explicit_euler_velocity_convergence() {
    // Euler velocities belong to the current position
    let errors = velocity_error_sequence(&ExplicitEuler, 0);
    assert_convergence_ratio(&errors, 1.8..2.2, "Explicit Euler velocity");
}

#[test]
fn test_verlet_lagged_velocity_convergence() {
    // The central difference belongs to the sample one step back
    let errors = velocity_error_sequence(&Verlet, 1);
    assert_convergence_ratio(&errors, 3.5..4.5, "Verlet velocity");
    assert!(errors[0] < 1e-4, "Verlet velocity error: {errors:?}");
}

#[test]
fn test_verlet_velocity_is_one_step_behind() {
    let dt = 0.001;
    let steps = 300;
    let lagged = velocity_error(Box::new(Verlet), dt, steps, 1);
    let unlagged = velocity_error(Box::new(Verlet), dt, steps, 0);

    // Reading it as the current velocity costs a full first-order error
    assert!(
        lagged * 100.0 < unlagged,
        "lagged {lagged} should be far below unlagged {unlagged}"
    );
}

#[test]
fn test_verlet_beats_euler() {
    for (dt, steps) in [(0.01, 30), (0.001, 300)] {
        let euler = position_error(Box::new(ExplicitEuler), dt, steps);
        let verlet = position_error(Box::new(Verlet), dt, steps);
        assert!(
            verlet < euler,
            "Verlet ({verlet}) should be more accurate than Euler ({euler}) at dt = {dt}"
        );
    }
}

#[test]
fn test_verlet_bounded_over_many_periods() {
    let oscillator = HarmonicOscillator::new();
    let dt = 0.001;
    let mut system = oscillator.build(Box::new(Verlet), dt);

    let mut max_displacement = 0.0f64;
    for _ in 0..20_000 {
        system.step(dt);
        let u = system.body(1).now().position.x - oscillator.rest_length;
        max_displacement = max_displacement.max(u.abs());
    }

    // 20 periods without the amplitude growing
    let growth = (max_displacement - oscillator.amplitude) / oscillator.amplitude;
    assert!(growth < 1e-3, "Amplitude growth: {growth}");
}
