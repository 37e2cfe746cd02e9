//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::error::NbodyError;
use crate::forces::{ForceModel, G};
use crate::state::SystemState;
use nalgebra::Vector2;

/// Acceleration of `body` caused by `source`: a = -G m_source / |r|³ · r
///
/// `r` points from the source to the body, so the result points back at the
/// source.
///
/// # Errors
///
/// [`NbodyError::CoincidentBodies`] when the separation is exactly zero.
pub fn acceleration_towards(
    body: &Body,
    source: &Body,
    g: f64,
) -> Result<Vector2<f64>, NbodyError> {
    let r = body.position - source.position;
    let distance = separation(body, source, &r)?;
    Ok(r * (-g * source.mass / distance.powi(3)))
}

/// Potential energy of a pair, -G m₁ m₂ / |r|
///
/// # Errors
///
/// [`NbodyError::CoincidentBodies`] when the separation is exactly zero.
pub fn pair_potential(a: &Body, b: &Body, g: f64) -> Result<f64, NbodyError> {
    let r = a.position - b.position;
    let distance = separation(a, b, &r)?;
    Ok(-g * a.mass * b.mass / distance)
}

fn separation(a: &Body, b: &Body, r: &Vector2<f64>) -> Result<f64, NbodyError> {
    let distance = r.magnitude();
    if distance == 0.0 {
        return Err(NbodyError::CoincidentBodies { a: a.id, b: b.id });
    }
    Ok(distance)
}

/// Direct O(N²) gravitational force computation
///
/// Sums the pull of every other body, in index order. There is no softening:
/// bodies are expected to merge long before they can coincide, and an exact
/// overlap is reported as an error instead of producing `inf`.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::SystemState;
///
/// let mut state = SystemState::new();
/// state.add_body(Body::new(1e12, [100.0, 100.0], [0.0, 0.0], 1e9).unwrap());
/// state.add_body(Body::new(1e12, [200.0, 100.0], [0.0, 0.0], 1e9).unwrap());
///
/// let gravity = DirectGravity::new();
/// let a0 = gravity.acceleration(0, &state).unwrap();
/// let a1 = gravity.acceleration(1, &state).unwrap();
///
/// // Equal masses pull each other equally hard in opposite directions
/// assert!(a0.x > 0.0);
/// assert!((a0 + a1).magnitude() < 1e-18);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DirectGravity {
    /// Gravitational constant in m³ kg⁻¹ s⁻²
    pub g: f64,
}

impl DirectGravity {
    /// Creates a direct gravity force using the physical value of G
    pub fn new() -> Self {
        Self { g: G }
    }

    /// Creates a direct gravity force with a custom gravitational constant
    ///
    /// Handy for toy arenas where the physical G would make everything crawl.
    pub fn with_constant(g: f64) -> Self {
        Self { g }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Result<Vector2<f64>, NbodyError> {
        let body = &state.bodies[idx];

        state
            .bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .try_fold(Vector2::zeros(), |acc, (_, other)| {
                acceleration_towards(body, other, self.g).map(|a| acc + a)
            })
    }

    fn potential_energy(&self, state: &SystemState) -> Result<f64, NbodyError> {
        // Each unordered pair counted once
        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| state.bodies[i + 1..].iter().map(move |b| (a, b)))
            .try_fold(0.0, |acc, (a, b)| {
                pair_potential(a, b, self.g).map(|pe| acc + pe)
            })
    }
}
