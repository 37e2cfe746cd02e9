//! Collision resolution through inelastic mergers
//!
//! When bodies collide, the survivor takes over:
//! - Total mass: m = m_s + m_a
//! - Total momentum: v = (p_s + p_a) / m
//! - Centre of mass: x = (m_s x_s + m_a x_a) / m
//! - Angular momentum: the orbital angular momentum of both bodies about the
//!   new centre becomes spin, on top of their existing spins
//!
//! Density is kept, so the survivor's radius grows with its mass.

use crate::body::{Body, BodyId, cross};
use crate::collisions::CollisionEvent;
use crate::state::SystemState;
use log::{debug, warn};
use nalgebra::Point2;
use std::collections::{HashMap, HashSet};

/// Merge `absorbed` into `survivor`
///
/// The result keeps the survivor's id and density.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::collisions::merge_bodies;
///
/// let a = Body::new(1.0, [1.0, 0.0], [0.0, 5.0], 1.0).unwrap();
/// let b = Body::new(1.0, [2.0, 0.0], [0.0, 3.0], 1.0).unwrap();
///
/// let merged = merge_bodies(&a, &b);
///
/// // Mass is conserved
/// assert_eq!(merged.mass, 2.0);
///
/// // Momentum is conserved
/// let p_initial = a.momentum() + b.momentum();
/// assert!((merged.momentum() - p_initial).magnitude() < 1e-12);
///
/// // Angular momentum is conserved, part of it now as spin
/// let l_initial = a.angular_momentum() + b.angular_momentum();
/// assert!((merged.angular_momentum() - l_initial).abs() < 1e-12);
/// assert!(merged.spin != 0.0);
/// ```
pub fn merge_bodies(survivor: &Body, absorbed: &Body) -> Body {
    let total_mass = survivor.mass + absorbed.mass;
    let total_momentum = survivor.momentum() + absorbed.momentum();

    let pos_coords =
        (survivor.position.coords * survivor.mass + absorbed.position.coords * absorbed.mass)
            / total_mass;
    let position = Point2::from(pos_coords);

    let spin = cross(&(survivor.position - position), &survivor.momentum())
        + cross(&(absorbed.position - position), &absorbed.momentum())
        + survivor.spin
        + absorbed.spin;

    Body {
        id: survivor.id,
        mass: total_mass,
        density: survivor.density,
        position,
        velocity: total_momentum / total_mass,
        spin,
    }
}

/// Apply collision events to the system
///
/// Every merge is computed from the state as it was before this call, then
/// survivors are overwritten and absorbed bodies dropped in one pass.
/// Events are not chained: if a survivor of one event is the absorbed body of
/// another, each event still merges the pre-call bodies, so only the pair
/// totals of each event are conserved. [`DirectDetector`] never produces such
/// event lists.
///
/// Events naming a body that is not in the system are skipped.
///
/// # Returns
///
/// Number of merges applied
///
/// [`DirectDetector`]: crate::collisions::DirectDetector
pub fn resolve_collisions(state: &mut SystemState, events: &[CollisionEvent]) -> usize {
    let index: HashMap<BodyId, usize> = state
        .bodies
        .iter()
        .enumerate()
        .map(|(i, b)| (b.id, i))
        .collect();

    let merges: Vec<(usize, Body, BodyId)> = events
        .iter()
        .filter_map(|event| {
            match (index.get(&event.survivor), index.get(&event.absorbed)) {
                (Some(&s), Some(&a)) => {
                    let merged = merge_bodies(&state.bodies[s], &state.bodies[a]);
                    Some((s, merged, event.absorbed))
                }
                _ => {
                    warn!(
                        "skipping collision {} <- {}: body no longer in system",
                        event.survivor, event.absorbed
                    );
                    None
                }
            }
        })
        .collect();

    let mut absorbed: HashSet<BodyId> = HashSet::with_capacity(merges.len());
    for (slot, merged, gone) in &merges {
        debug!(
            "{} absorbed {}: mass {:.3e} kg, spin {:.3e}",
            merged.id, gone, merged.mass, merged.spin
        );
        state.bodies[*slot] = *merged;
        absorbed.insert(*gone);
    }

    state.bodies.retain(|b| !absorbed.contains(&b.id));

    merges.len()
}
