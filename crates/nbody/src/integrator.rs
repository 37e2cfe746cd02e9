//! Time integration for N-body systems
//!
//! The simulation steps with semi-implicit (symplectic) Euler: velocities are
//! kicked with accelerations taken at the current positions, then positions
//! drift with the freshly updated velocities.

use crate::error::NbodyError;
use crate::forces::ForceModel;
use crate::state::SystemState;
use nalgebra::Vector2;

/// A time integrator for N-body systems
pub trait Integrator {
    /// Advance the system by one timestep
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `force` - Force model to compute accelerations
    ///
    /// # Errors
    ///
    /// Whatever the force model reports. The state is untouched when the
    /// step fails.
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), NbodyError>;

    /// Advance the system by multiple timesteps
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> Result<f64, NbodyError> {
        for _ in 0..n_steps {
            self.step(state, dt, force)?;
        }
        Ok(state.time)
    }
}

/// Semi-implicit Euler integrator (1st order, symplectic)
///
/// 1. Kick: v(t + dt) = v(t) + a(x(t)) * dt
/// 2. Drift: x(t + dt) = x(t) + v(t + dt) * dt
///
/// Every acceleration in the kick is computed from positions before any body
/// moves, so the result does not depend on body order.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::DirectGravity;
/// use nbody::integrator::{Integrator, SemiImplicitEuler};
/// use nbody::state::SystemState;
///
/// let mut state = SystemState::new();
/// state.add_body(Body::new(5.972e24, [0.0, 0.0], [0.0, 0.0], 5510.0).unwrap());
/// state.add_body(Body::new(7.34e22, [3.844e8, 0.0], [0.0, 1022.0], 3340.0).unwrap());
///
/// SemiImplicitEuler
///     .step(&mut state, 60.0, &DirectGravity::new())
///     .unwrap();
/// assert_eq!(state.time, 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl SemiImplicitEuler {
    /// Kick: update velocities from accelerations at the current positions
    fn kick(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), NbodyError> {
        // All accelerations first, so a failing pair leaves every body as it was
        let accelerations: Vec<Vector2<f64>> = (0..state.bodies.len())
            .map(|i| force.acceleration(i, state))
            .collect::<Result<_, _>>()?;

        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.velocity += accel * dt;
            });

        Ok(())
    }

    /// Drift: update positions with the current velocities
    fn drift(&self, state: &mut SystemState, dt: f64) {
        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
        });
    }
}

impl Integrator for SemiImplicitEuler {
    fn step(
        &self,
        state: &mut SystemState,
        dt: f64,
        force: &dyn ForceModel,
    ) -> Result<(), NbodyError> {
        self.kick(state, dt, force)?;
        self.drift(state, dt);
        state.time += dt;
        Ok(())
    }
}
