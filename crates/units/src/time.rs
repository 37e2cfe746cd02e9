use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub(crate) const MS_PER_SECOND: f64 = 1000.0;
pub(crate) const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct stores seconds. Frame clocks hand out milliseconds, so
/// the millisecond constructor is the one the integrator leans on.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let tick = Time::from_milliseconds(20.0);
/// assert_eq!(tick.to_seconds(), 0.02);
///
/// let month = Time::from_days(27.3);
/// assert!(month.to_hours() > 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: seconds

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value)
    }

    pub fn from_milliseconds(value: f64) -> Self {
        Self(value / MS_PER_SECOND)
    }

    pub fn from_hours(value: f64) -> Self {
        Self(value * SECONDS_PER_HOUR)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value * SECONDS_PER_DAY)
    }

    pub fn to_seconds(&self) -> f64 {
        self.0
    }

    pub fn to_milliseconds(&self) -> f64 {
        self.0 * MS_PER_SECOND
    }

    pub fn to_hours(&self) -> f64 {
        self.0 / SECONDS_PER_HOUR
    }

    pub fn to_days(&self) -> f64 {
        self.0 / SECONDS_PER_DAY
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Time (commutative multiplication)
impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
