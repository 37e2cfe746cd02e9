use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Earth in kilograms (5.972 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mass of the Moon in kilograms (7.34 × 10²² kg)
pub const MOON_MASS_KG: f64 = 7.34e22;

const GRAMS_PER_KG: f64 = 1000.0;
const KG_PER_TONNE: f64 = 1000.0;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct stores kilograms, the unit the simulation core works in.
/// Astronomical constructors exist so scenarios can be written in the units
/// people actually quote.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// let moon = Mass::from_moon_masses(1.0);
///
/// assert!(earth > moon);
/// assert_eq!(Mass::from_grams(1000.0).to_kg(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / GRAMS_PER_KG)
    }

    /// Creates a new `Mass` from a value in metric tonnes.
    pub fn from_tonnes(value: f64) -> Self {
        Self(value * KG_PER_TONNE)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::{Mass, EARTH_MASS_KG};
    ///
    /// let super_earth = Mass::from_earth_masses(5.0);
    /// assert_eq!(super_earth.to_kg(), 5.0 * EARTH_MASS_KG);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    /// Creates a new `Mass` from a value in lunar masses.
    pub fn from_moon_masses(value: f64) -> Self {
        Self(value * MOON_MASS_KG)
    }

    pub fn to_kg(&self) -> f64 {
        self.0
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * GRAMS_PER_KG
    }

    pub fn to_tonnes(&self) -> f64 {
        self.0 / KG_PER_TONNE
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 / EARTH_MASS_KG
    }

    pub fn to_moon_masses(&self) -> f64 {
        self.0 / MOON_MASS_KG
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}

impl std::iter::Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        Mass(iter.map(|m| m.0).sum())
    }
}
