use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const M_PER_KM: f64 = 1000.0;
pub const CM_PER_M: f64 = 100.0;

/// Mean Earth–Moon distance in metres (384,400 km)
pub const LUNAR_DISTANCE_M: f64 = 3.844e8;

/// Mean radius of the Earth in metres
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct stores metres. The simulation arena is measured in
/// metres with the origin in the top-left corner, so no other base unit makes
/// sense here.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_lunar_distances(1.0);
/// assert_eq!(orbit.to_km(), 384_400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: metres

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in metres.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometres.
    pub fn from_km(value: f64) -> Self {
        Self(value * M_PER_KM)
    }

    /// Creates a new `Length` from a value in centimetres.
    pub fn from_cm(value: f64) -> Self {
        Self(value / CM_PER_M)
    }

    /// Creates a new `Length` from a value in mean Earth–Moon distances.
    pub fn from_lunar_distances(value: f64) -> Self {
        Self(value * LUNAR_DISTANCE_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    pub fn to_m(&self) -> f64 {
        self.0
    }

    pub fn to_km(&self) -> f64 {
        self.0 / M_PER_KM
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * CM_PER_M
    }

    pub fn to_lunar_distances(&self) -> f64 {
        self.0 / LUNAR_DISTANCE_M
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 / EARTH_RADIUS_M
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
