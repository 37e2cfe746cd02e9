use serde::{Deserialize, Serialize};

const KG_PER_M3_PER_G_PER_CM3: f64 = 1000.0;

/// Volume density in kg/m³
///
/// Bodies are treated as uniform spheres, so density is only ever used to turn
/// a mass into a radius.
///
/// ```rust
/// use units::Density;
///
/// let rock = Density::from_grams_per_cm3(5.51);
/// assert!((rock.to_kg_per_m3() - 5510.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value * KG_PER_M3_PER_G_PER_CM3)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 / KG_PER_M3_PER_G_PER_CM3
    }
}
