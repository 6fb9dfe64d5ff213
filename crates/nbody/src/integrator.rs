//! Time integration for N-body systems

use crate::forces::ForceModel;
use crate::state::SystemState;
use nalgebra::Vector2;

/// A fixed-step time integrator
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep of `dt` years
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel);

    /// Advance the system by `n_steps` timesteps, returning the final time
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        self.integrate_observed(state, dt, n_steps, force, &mut |_| {})
    }

    /// Like [`integrate`](Integrator::integrate), calling `observer` after
    /// every step so callers can accumulate kinematics along the way.
    fn integrate_observed(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
        observer: &mut dyn FnMut(&SystemState),
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
            observer(state);
        }
        state.time
    }
}

/// Symplectic kick-drift-kick leapfrog (2nd order)
///
/// 1. Kick: v(t + dt/2) = v(t) + a(t) · dt/2
/// 2. Drift: x(t + dt) = x(t) + v(t + dt/2) · dt
/// 3. Kick: v(t + dt) = v(t + dt/2) + a(t + dt) · dt/2
///
/// Bounded energy error and exact angular momentum conservation for central
/// forces make it suitable for the short stabilization runs used here.
///
/// # Examples
///
/// ```
/// use nbody::{Integrator, Leapfrog, StarGravity, SystemState};
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body(3.0e-6, Point2::new(1.0, 0.0), Vector2::new(0.0, 6.283));
///
/// Leapfrog.step(&mut system, 0.01, &StarGravity);
/// assert!(system.time > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Leapfrog {
    fn kick(state: &mut SystemState, dt_half: f64, force: &dyn ForceModel) {
        let accelerations: Vec<Vector2<f64>> = (0..state.bodies.len())
            .map(|i| force.acceleration(i, state))
            .collect();

        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| body.velocity += accel * dt_half);
    }

    fn drift(state: &mut SystemState, dt: f64) {
        state
            .bodies
            .iter_mut()
            .for_each(|body| body.position += body.velocity * dt);
    }
}

impl Integrator for Leapfrog {
    fn step(&self, state: &mut SystemState, dt: f64, force: &dyn ForceModel) {
        Self::kick(state, dt / 2.0, force);
        Self::drift(state, dt);
        Self::kick(state, dt / 2.0, force);
        state.time += dt;
    }
}
