use std::f64::consts::PI;
use std::fmt;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use units::{Density, Length, Mass, Time};

use crate::error::NbodyError;
use crate::forces::{gravity, G};

/// Stable handle for a body, assigned by the owning [`SystemState`](crate::state::SystemState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A massive ball: a point mass with a radius derived from its density
///
/// Positions use screen convention (origin top-left, y pointing down). Spin is
/// the intrinsic angular momentum about the out-of-plane axis and is only
/// ever non-zero for bodies produced by a merge.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,              // kg
    pub density: f64,           // kg/m³ (uniform sphere)
    pub position: Point2<f64>,  // m
    pub velocity: Vector2<f64>, // m/s
    pub spin: f64,              // kg·m²/s, counter-clockwise positive
}

/// Plain persisted shape of a body
///
/// The short keys `m`, `r` and `v` are accepted on input so that saves
/// written before spin existed still load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    #[serde(alias = "m")]
    pub mass: f64,
    pub density: f64,
    #[serde(alias = "r")]
    pub position: [f64; 2],
    #[serde(alias = "v")]
    pub velocity: [f64; 2],
    #[serde(default)]
    pub spin: f64,
}

impl Body {
    /// Creates a non-spinning body
    ///
    /// The id is a placeholder until the body is added to a system.
    ///
    /// # Errors
    ///
    /// [`NbodyError::InvalidBody`] if mass or density is not a positive finite
    /// number, or if position or velocity is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    ///
    /// let ball = Body::new(1.5e12, [300.0, 200.0], [0.0, 0.0], 1e9).unwrap();
    /// assert!(ball.radius() > 0.0);
    /// assert_eq!(ball.spin, 0.0);
    ///
    /// assert!(Body::new(0.0, [0.0, 0.0], [0.0, 0.0], 1e9).is_err());
    /// ```
    pub fn new(
        mass: f64,
        position: [f64; 2],
        velocity: [f64; 2],
        density: f64,
    ) -> Result<Self, NbodyError> {
        validate(mass, density, position, velocity)?;
        Ok(Body {
            id: BodyId(0),
            mass,
            density,
            position: Point2::new(position[0], position[1]),
            velocity: Vector2::new(velocity[0], velocity[1]),
            spin: 0.0,
        })
    }

    /// Creates a body from unit-carrying quantities
    pub fn from_quantities(
        mass: Mass,
        position: [Length; 2],
        velocity: [f64; 2],
        density: Density,
    ) -> Result<Self, NbodyError> {
        Self::new(
            mass.to_kg(),
            [position[0].to_m(), position[1].to_m()],
            velocity,
            density.to_kg_per_m3(),
        )
    }

    /// Rebuilds a body from its persisted record
    pub fn from_record(record: &BodyRecord) -> Result<Self, NbodyError> {
        if !record.spin.is_finite() {
            return Err(invalid("spin must be finite"));
        }
        Ok(Self::new(record.mass, record.position, record.velocity, record.density)?
            .with_spin(record.spin))
    }

    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = spin;
        self
    }

    pub fn to_record(&self) -> BodyRecord {
        BodyRecord {
            mass: self.mass,
            density: self.density,
            position: [self.position.x, self.position.y],
            velocity: [self.velocity.x, self.velocity.y],
            spin: self.spin,
        }
    }

    /// Radius of a uniform sphere of this mass and density (V = 4/3 π r³)
    pub fn radius(&self) -> f64 {
        let volume = self.mass / self.density;
        (0.75 * volume / PI).cbrt()
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    /// Solid-sphere moment of inertia, 2/5 m r²
    pub fn moment_of_inertia(&self) -> f64 {
        0.4 * self.mass * self.radius().powi(2)
    }

    pub fn angular_velocity(&self) -> f64 {
        self.spin / self.moment_of_inertia()
    }

    pub fn translational_kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn rotational_kinetic_energy(&self) -> f64 {
        0.5 * self.moment_of_inertia() * self.angular_velocity().powi(2)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.translational_kinetic_energy() + self.rotational_kinetic_energy()
    }

    /// Orbital angular momentum about the world origin (z-component of r × p)
    pub fn orbital_angular_momentum(&self) -> f64 {
        cross(&self.position.coords, &self.momentum())
    }

    /// Orbital plus spin angular momentum
    pub fn angular_momentum(&self) -> f64 {
        self.orbital_angular_momentum() + self.spin
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Gravitational potential energy of the pair, -G m₁ m₂ / r
    ///
    /// Always uses the physical [`G`]. [`System`](crate::System) sums pairs
    /// with its configured `gravitational_constant` instead, so the two
    /// disagree when that setting is changed.
    pub fn potential_energy(&self, other: &Body) -> Result<f64, NbodyError> {
        gravity::pair_potential(self, other, G)
    }

    /// Kicks the velocity by the pull of `other` over `dt_ms` milliseconds
    ///
    /// Only positions are read, so a full pass over every ordered pair sees
    /// the same positions no matter the order it runs in.
    ///
    /// Always uses the physical [`G`]; [`System::update`](crate::System::update)
    /// goes through its configured `gravitational_constant` instead.
    ///
    /// # Errors
    ///
    /// [`NbodyError::CoincidentBodies`] when the two bodies share a position.
    /// The velocity is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    ///
    /// let mut moon = Body::new(7.34e22, [3.844e8, 0.0], [0.0, 1022.0], 3340.0).unwrap();
    /// let earth = Body::new(5.972e24, [0.0, 0.0], [0.0, 0.0], 5510.0).unwrap();
    ///
    /// moon.update_velocity(&earth, 1000.0).unwrap();
    /// assert!(moon.velocity.x < 0.0); // pulled towards the Earth
    /// ```
    pub fn update_velocity(&mut self, other: &Body, dt_ms: f64) -> Result<(), NbodyError> {
        let acceleration = gravity::acceleration_towards(self, other, G)?;
        self.velocity += acceleration * Time::from_milliseconds(dt_ms).to_seconds();
        Ok(())
    }

    /// Drifts the position with the current velocity over `dt_ms` milliseconds
    pub fn update_position(&mut self, dt_ms: f64) {
        self.position += self.velocity * Time::from_milliseconds(dt_ms).to_seconds();
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}, {}] [{}, {}] {}",
            self.id,
            self.mass,
            self.density,
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
            self.spin
        )
    }
}

/// z-component of the 2D cross product
pub(crate) fn cross(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

fn validate(
    mass: f64,
    density: f64,
    position: [f64; 2],
    velocity: [f64; 2],
) -> Result<(), NbodyError> {
    if !(mass.is_finite() && mass > 0.0) {
        return Err(invalid(format!("mass must be positive and finite, got {mass}")));
    }
    if !(density.is_finite() && density > 0.0) {
        return Err(invalid(format!(
            "density must be positive and finite, got {density}"
        )));
    }
    if !position.iter().all(|c| c.is_finite()) {
        return Err(invalid("position must be finite"));
    }
    if !velocity.iter().all(|c| c.is_finite()) {
        return Err(invalid("velocity must be finite"));
    }
    Ok(())
}

fn invalid(reason: impl Into<String>) -> NbodyError {
    NbodyError::InvalidBody {
        reason: reason.into(),
    }
}
