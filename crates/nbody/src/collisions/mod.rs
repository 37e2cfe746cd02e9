//! Collision detection and resolution for N-body systems
//!
//! Overlapping bodies merge inelastically: mass, momentum and angular
//! momentum carry over to the heavier body, which keeps its identity.

pub mod detection;
pub mod resolution;


pub use detection::{CollisionDetector, CollisionEvent, DirectDetector, check_pair};
pub use resolution::{merge_bodies, resolve_collisions};
