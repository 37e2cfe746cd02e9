//! Gravitating balls in a 2D arena
//!
//! A handful of massive bodies attract each other by direct O(N²) Newtonian
//! gravity, are stepped with semi-implicit Euler, and merge when they touch.
//! Everything is in SI units; timesteps are handed in as milliseconds since
//! that is what frame clocks produce.
//!
//! ```
//! use nbody::body::Body;
//! use nbody::system::{System, SystemConfig};
//!
//! let earth = Body::new(5.972e24, [0.0, 0.0], [0.0, 0.0], 5510.0).unwrap();
//! let moon = Body::new(7.34e22, [3.844e8, 0.0], [0.0, 1022.0], 3340.0).unwrap();
//! let mut system = System::new([earth, moon], SystemConfig::default());
//!
//! let before = system.info().unwrap();
//! for _ in 0..60 {
//!     system.update(60_000.0).unwrap(); // one minute per step
//! }
//! let after = system.info().unwrap();
//!
//! assert!(after.energy < 0.0);
//! assert!((after.momentum - before.momentum).abs() <= 1e-6 * before.momentum.max(1.0));
//! ```

pub mod body;
pub mod collisions;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod state;
pub mod system;


pub use body::{Body, BodyId, BodyRecord};
pub use error::NbodyError;
pub use system::{System, SystemConfig, SystemInfo};
