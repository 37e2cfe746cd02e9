//! The simulated arena: bodies plus the step pipeline that moves them
//!
//! One call to [`System::update`] runs, in order, the gravitational kick for
//! every ordered pair, the drift of every body, and the merge of overlapping
//! bodies. Hosts call it once per sub-step and read [`System::info`] and
//! [`System::center_of_mass`] for display.

use std::fmt;

use log::{debug, trace};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use units::Time;

use crate::body::{Body, BodyRecord};
use crate::collisions::{CollisionDetector, DirectDetector, resolve_collisions};
use crate::error::NbodyError;
use crate::forces::{DirectGravity, ForceModel, G};
use crate::integrator::{Integrator, SemiImplicitEuler};
use crate::state::SystemState;

/// Tunables for a [`System`]
///
/// # Examples
///
/// ```
/// use nbody::system::SystemConfig;
///
/// let config = SystemConfig {
///     time_scale: 10.0,
///     ..SystemConfig::default()
/// };
/// assert!(config.collisions);
/// assert_eq!(config.distance_scale, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Multiplier applied to positions when they are measured for display
    /// (pixels per metre). Physics always runs in metres.
    pub distance_scale: f64,
    /// Simulated milliseconds per millisecond of timestep handed to `update`
    pub time_scale: f64,
    /// Gravitational constant in m³ kg⁻¹ s⁻²
    pub gravitational_constant: f64,
    /// Whether overlapping bodies merge; off gives a collisionless run
    pub collisions: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            distance_scale: 1.0,
            time_scale: 1.0,
            gravitational_constant: G,
            collisions: true,
        }
    }
}

/// Aggregate totals used to watch conservation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Magnitude of the summed momentum (kg·m/s)
    pub momentum: f64,
    /// Orbital angular momentum about the origin plus all spin (kg·m²/s)
    pub angular_momentum: f64,
    /// Kinetic energy plus pairwise potential energy (J)
    pub energy: f64,
}

/// A set of bodies under mutual gravity
pub struct System {
    state: SystemState,
    config: SystemConfig,
    gravity: DirectGravity,
    integrator: SemiImplicitEuler,
    detector: DirectDetector,
}

impl System {
    /// Creates a system from initial bodies, assigning each a fresh id
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::system::{System, SystemConfig};
    ///
    /// let bodies = vec![
    ///     Body::new(1e12, [100.0, 100.0], [0.0, 0.0], 1e9).unwrap(),
    ///     Body::new(1e12, [300.0, 100.0], [0.0, 0.0], 1e9).unwrap(),
    /// ];
    /// let mut system = System::new(bodies, SystemConfig::default());
    ///
    /// system.update(20.0).unwrap();
    /// assert_eq!(system.body_count(), 2);
    /// ```
    pub fn new(bodies: impl IntoIterator<Item = Body>, config: SystemConfig) -> Self {
        Self {
            state: SystemState::with_bodies(bodies),
            config,
            gravity: DirectGravity::with_constant(config.gravitational_constant),
            integrator: SemiImplicitEuler,
            detector: DirectDetector,
        }
    }

    /// Rebuilds a system from persisted body records
    pub fn from_records(records: &[BodyRecord], config: SystemConfig) -> Result<Self, NbodyError> {
        let bodies = records
            .iter()
            .map(Body::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(bodies, config))
    }

    /// Advances the system by one step of `timestep_ms * time_scale` milliseconds
    ///
    /// # Errors
    ///
    /// [`NbodyError::CoincidentBodies`] if two bodies share a position when
    /// the gravitational pass runs. Nothing is moved in that case.
    pub fn update(&mut self, timestep_ms: f64) -> Result<(), NbodyError> {
        let dt = Time::from_milliseconds(timestep_ms) * self.config.time_scale;

        self.integrator
            .step(&mut self.state, dt.to_seconds(), &self.gravity)?;

        if self.config.collisions {
            let events = self.detector.detect(&self.state);
            if !events.is_empty() {
                let merged = resolve_collisions(&mut self.state, &events);
                debug!(
                    "t={:.3}s: {} merge(s), {} bodies left",
                    self.state.time,
                    merged,
                    self.state.body_count()
                );
            }
        }

        trace!("t={:.3}s: stepped {:.3}ms", self.state.time, dt.to_milliseconds());
        Ok(())
    }

    /// Total momentum magnitude, angular momentum and energy
    ///
    /// # Errors
    ///
    /// [`NbodyError::EmptySystem`] with no bodies, and
    /// [`NbodyError::CoincidentBodies`] if the potential energy of a pair is
    /// undefined.
    pub fn info(&self) -> Result<SystemInfo, NbodyError> {
        if self.state.is_empty() {
            return Err(NbodyError::EmptySystem);
        }

        Ok(SystemInfo {
            momentum: self.state.total_momentum().magnitude(),
            angular_momentum: self.state.total_angular_momentum(),
            energy: self.state.kinetic_energy() + self.gravity.potential_energy(&self.state)?,
        })
    }

    /// Mass-weighted mean position, scaled by `distance_scale`
    pub fn center_of_mass(&self) -> Result<Point2<f64>, NbodyError> {
        let com = self.state.center_of_mass()?;
        Ok(Point2::from(com.coords * self.config.distance_scale))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn body_count(&self) -> usize {
        self.state.body_count()
    }

    pub fn total_mass(&self) -> f64 {
        self.state.total_mass()
    }

    /// Simulated time in seconds
    pub fn time(&self) -> f64 {
        self.state.time
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn to_records(&self) -> Vec<BodyRecord> {
        self.state.bodies.iter().map(Body::to_record).collect()
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, body) in self.state.bodies.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{body}")?;
        }
        Ok(())
    }
}
