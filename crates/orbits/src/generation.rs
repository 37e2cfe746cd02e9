//! Random starting systems
//!
//! Balls are dropped at rest on integer coordinates inside the arena margin,
//! each with a mass between one and two trillion kilograms. Generation only
//! reads from the supplied rng, so a run seeded from its UUID can be rebuilt
//! exactly.

use std::collections::HashSet;

use log::debug;
use nbody::{Body, NbodyError, System, SystemConfig};
use rand::Rng;
use rand_chacha::ChaChaRng;
use thiserror::Error;

use crate::config::Arena;

/// Lightest generated ball in kg; the heaviest is just under twice this
pub const BASE_MASS_KG: f64 = 1e12;

/// Density of every generated ball in kg/m³
pub const BALL_DENSITY: f64 = 1e9;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot place {requested} balls: the arena only has {capacity} free positions")]
    ArenaFull { requested: usize, capacity: u64 },

    #[error(transparent)]
    Body(#[from] NbodyError),
}

/// Draws one ball at rest somewhere in the arena
pub fn random_ball(arena: &Arena, rng: &mut ChaChaRng) -> Result<Body, NbodyError> {
    let mass = (1.0 + rng.random::<f64>()) * BASE_MASS_KG;
    let x = rng.random_range(arena.x_range());
    let y = rng.random_range(arena.y_range());

    Body::new(mass, [f64::from(x), f64::from(y)], [0.0, 0.0], BALL_DENSITY)
}

/// Builds a system of `n` random balls
///
/// Two balls never share a position: a draw that lands on an occupied point
/// is thrown away and redrawn, since coincident bodies have no defined
/// gravity between them.
///
/// # Errors
///
/// [`GenerationError::ArenaFull`] if `n` exceeds the number of integer
/// positions inside the margin.
///
/// # Examples
///
/// ```
/// use nbody::SystemConfig;
/// use orbits::{Arena, create_system};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let system = create_system(10, &Arena::default(), &mut rng, SystemConfig::default()).unwrap();
/// assert_eq!(system.body_count(), 10);
/// ```
pub fn create_system(
    n: usize,
    arena: &Arena,
    rng: &mut ChaChaRng,
    config: SystemConfig,
) -> Result<System, GenerationError> {
    let capacity = arena.capacity();
    if n as u64 > capacity {
        return Err(GenerationError::ArenaFull {
            requested: n,
            capacity,
        });
    }

    let mut taken: HashSet<(u64, u64)> = HashSet::with_capacity(n);
    let mut bodies = Vec::with_capacity(n);

    while bodies.len() < n {
        let ball = random_ball(arena, rng)?;
        let key = (ball.position.x.to_bits(), ball.position.y.to_bits());
        if taken.insert(key) {
            bodies.push(ball);
        }
    }

    debug!(
        "generated {} balls in a {}x{} arena, {:.3e} kg in total",
        n,
        arena.width,
        arena.height,
        bodies.iter().map(|b| b.mass).sum::<f64>()
    );

    Ok(System::new(bodies, config))
}
