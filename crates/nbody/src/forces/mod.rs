//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct-summation
//! Newtonian gravity that drives the simulation.

use crate::error::NbodyError;
use crate::state::SystemState;
use nalgebra::Vector2;

pub mod gravity;

#[cfg(test)]
mod gravity_test;

pub use gravity::DirectGravity;

/// Newtonian gravitational constant in m³ kg⁻¹ s⁻² (CODATA 2018)
pub const G: f64 = 6.6743e-11;

/// A source of acceleration on bodies in an N-body system
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::SystemState;
///
/// let mut state = SystemState::new();
/// state.add_body(Body::new(5.972e24, [0.0, 0.0], [0.0, 0.0], 5510.0).unwrap());
/// state.add_body(Body::new(7.34e22, [3.844e8, 0.0], [0.0, 1022.0], 3340.0).unwrap());
///
/// let gravity = DirectGravity::new();
/// let accel = gravity.acceleration(1, &state).unwrap();
/// assert!(accel.x < 0.0);
/// ```
pub trait ForceModel {
    /// Compute acceleration on body at index `idx` given full system state
    ///
    /// # Returns
    ///
    /// Acceleration vector in m/s²
    fn acceleration(&self, idx: usize, state: &SystemState) -> Result<Vector2<f64>, NbodyError>;

    /// Compute potential energy contribution (optional)
    ///
    /// Default implementation returns 0.0. Override for force models
    /// that store energy in the configuration, such as gravity.
    fn potential_energy(&self, _state: &SystemState) -> Result<f64, NbodyError> {
        Ok(0.0)
    }
}
