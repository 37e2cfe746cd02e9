//! Pairwise overlap detection
//!
//! Bodies collide when their spheres overlap: the separation of their centres
//! is less than the sum of their radii.

use crate::body::{Body, BodyId};
use crate::state::SystemState;
use std::collections::HashSet;

/// A detected collision, already decided in favour of the heavier body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Body that absorbs the other and keeps its id
    pub survivor: BodyId,
    /// Body that is folded into the survivor and removed
    pub absorbed: BodyId,
    /// Current separation of the two centres (m)
    pub separation: f64,
    /// Sum of the two radii that the separation fell below (m)
    pub contact_distance: f64,
}

/// Check if a pair of bodies overlaps
///
/// `earlier` is the body that comes first in scan order. The heavier body
/// survives; on a mass tie the later body does.
///
/// # Examples
///
/// ```
/// use nbody::body::{Body, BodyId};
/// use nbody::collisions::check_pair;
///
/// let mut big = Body::new(2e12, [100.0, 100.0], [0.0, 0.0], 1e9).unwrap();
/// let mut small = Body::new(1e12, [105.0, 100.0], [0.0, 0.0], 1e9).unwrap();
/// big.id = BodyId(0);
/// small.id = BodyId(1);
///
/// let event = check_pair(&big, &small).unwrap();
/// assert_eq!(event.survivor, BodyId(0));
/// assert_eq!(event.absorbed, BodyId(1));
/// ```
pub fn check_pair(earlier: &Body, later: &Body) -> Option<CollisionEvent> {
    let separation = earlier.distance_to(later);
    let contact_distance = earlier.radius() + later.radius();

    if separation >= contact_distance {
        return None;
    }

    let (survivor, absorbed) = if earlier.mass > later.mass {
        (earlier.id, later.id)
    } else {
        (later.id, earlier.id)
    };

    Some(CollisionEvent {
        survivor,
        absorbed,
        separation,
        contact_distance,
    })
}

/// Collision detector trait
pub trait CollisionDetector {
    /// Detect all collisions in the system
    ///
    /// Every body appears in at most one returned event.
    fn detect(&self, state: &SystemState) -> Vec<CollisionEvent>;
}

/// Direct O(N²) collision detector
///
/// Scans pairs (i, j) with i < j, i ascending then j ascending. Once a body
/// is part of a detected collision it is claimed and skipped for the rest of
/// the pass, so each body merges at most once per step. A three-way overlap
/// therefore resolves in scan order rather than symmetrically: the first
/// overlapping pair merges now and the third body waits for the next step.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::collisions::{CollisionDetector, DirectDetector};
/// use nbody::state::SystemState;
///
/// let mut system = SystemState::new();
/// system.add_body(Body::new(1e12, [100.0, 100.0], [0.0, 0.0], 1e9).unwrap());
/// system.add_body(Body::new(1e12, [101.0, 100.0], [0.0, 0.0], 1e9).unwrap());
/// system.add_body(Body::new(1e12, [900.0, 600.0], [0.0, 0.0], 1e9).unwrap());
///
/// let collisions = DirectDetector.detect(&system);
/// assert_eq!(collisions.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDetector;

impl CollisionDetector for DirectDetector {
    fn detect(&self, state: &SystemState) -> Vec<CollisionEvent> {
        let bodies = &state.bodies;
        let mut claimed: HashSet<BodyId> = HashSet::new();
        let mut events = Vec::new();

        for (i, a) in bodies.iter().enumerate() {
            for b in &bodies[i + 1..] {
                if claimed.contains(&a.id) || claimed.contains(&b.id) {
                    continue;
                }

                if let Some(event) = check_pair(a, b) {
                    claimed.insert(event.survivor);
                    claimed.insert(event.absorbed);
                    events.push(event);
                }
            }
        }

        events
    }
}
