//! Preset starting systems

use nbody::{Body, NbodyError, System, SystemConfig};
use units::{Density, Length, Mass, Time};

use crate::generation::BALL_DENSITY;

/// Time scale that stretches a 20 ms frame tick into one simulated minute
pub const EARTH_MOON_TIME_SCALE: f64 = 3_000.0;

/// Moon speed relative to the Earth in m/s, a little under circular so the
/// orbit is a slightly eccentric ellipse
pub const MOON_SPEED: f64 = 1022.0;

/// Earth at the origin with the Moon one lunar distance away on +x
///
/// The relative speed is split so the two momenta cancel and the barycentre
/// stays put.
pub fn earth_moon(config: SystemConfig) -> Result<System, NbodyError> {
    let earth_mass = Mass::from_earth_masses(1.0);
    let moon_mass = Mass::from_moon_masses(1.0);
    let moon_share = moon_mass / (earth_mass + moon_mass);

    let earth = Body::from_quantities(
        earth_mass,
        [Length::zero(), Length::zero()],
        [0.0, -MOON_SPEED * moon_share],
        Density::from_grams_per_cm3(5.51),
    )?;
    let moon = Body::from_quantities(
        moon_mass,
        [Length::from_lunar_distances(1.0), Length::zero()],
        [0.0, MOON_SPEED * (1.0 - moon_share)],
        Density::from_grams_per_cm3(3.34),
    )?;

    Ok(System::new([earth, moon], config))
}

/// Default configuration for [`earth_moon`]: each update covers a minute
pub fn earth_moon_config() -> SystemConfig {
    SystemConfig {
        time_scale: EARTH_MOON_TIME_SCALE,
        ..SystemConfig::default()
    }
}

/// Sidereal period of the preset orbit from Kepler's third law
pub fn earth_moon_period() -> Time {
    let total = Mass::from_earth_masses(1.0) + Mass::from_moon_masses(1.0);
    let r = Length::from_lunar_distances(1.0);
    let seconds = std::f64::consts::TAU * (r.powi(3) / (nbody::forces::G * total.to_kg())).sqrt();
    Time::from_seconds(seconds)
}

/// Two arena balls flying straight at each other along y = 350
///
/// The heavier ball on the left moves right at 5 m/s, the lighter one on
/// the right moves left at 5 m/s. They merge within a few hundred frames.
pub fn head_on(config: SystemConfig) -> Result<System, NbodyError> {
    let heavy = Body::new(2e12, [100.0, 350.0], [5.0, 0.0], BALL_DENSITY)?;
    let light = Body::new(1e12, [200.0, 350.0], [-5.0, 0.0], BALL_DENSITY)?;

    Ok(System::new([heavy, light], config))
}
