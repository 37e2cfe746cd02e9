pub mod density;
pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod density_test;
#[cfg(test)]
mod length_test;
#[cfg(test)]
mod time_test;

pub use density::Density;
pub use length::Length;
pub use mass::{Mass, EARTH_MASS_KG, MOON_MASS_KG};
pub use time::Time;
