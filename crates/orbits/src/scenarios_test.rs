use approx::assert_relative_eq;

use nbody::{BodyId, SystemConfig};

use crate::scenarios::*;

#[test]
fn test_earth_moon_barycentre_is_at_rest() {
    let system = earth_moon(SystemConfig::default()).unwrap();

    let info = system.info().unwrap();
    assert!(info.momentum < 1e-6 * 7.34e22 * MOON_SPEED);

    let bodies = system.bodies();
    assert_relative_eq!(
        bodies[1].velocity.y - bodies[0].velocity.y,
        MOON_SPEED,
        max_relative = 1e-12
    );
}

#[test]
fn test_earth_moon_is_bound() {
    let system = earth_moon(earth_moon_config()).unwrap();

    assert!(system.info().unwrap().energy < 0.0);
    assert_eq!(system.config().time_scale, EARTH_MOON_TIME_SCALE);
}

#[test]
fn test_earth_moon_period_is_a_sidereal_month() {
    let days = earth_moon_period().to_days();
    assert!((27.0..27.6).contains(&days), "period {days} days");
}

#[test]
fn test_earth_moon_keeps_its_distance_for_a_day() {
    let mut system = earth_moon(earth_moon_config()).unwrap();

    // 20 ms ticks scaled to a minute each
    for _ in 0..1_440 {
        system.update(20.0).unwrap();
    }

    let bodies = system.bodies();
    let distance = bodies[0].distance_to(&bodies[1]);
    assert_relative_eq!(distance, 3.844e8, max_relative = 0.01);
    assert_relative_eq!(system.time(), 86_400.0, max_relative = 1e-9);
}

#[test]
fn test_head_on_merges_into_the_heavier_ball() {
    let mut system = head_on(SystemConfig::default()).unwrap();
    let momentum = system.info().unwrap().momentum;

    for _ in 0..2_000 {
        if system.body_count() == 1 {
            break;
        }
        system.update(20.0).unwrap();
    }

    assert_eq!(system.body_count(), 1);
    assert_eq!(system.bodies()[0].id, BodyId(0));
    assert_relative_eq!(system.total_mass(), 3e12);
    assert_relative_eq!(system.info().unwrap().momentum, momentum, max_relative = 1e-9);
}
