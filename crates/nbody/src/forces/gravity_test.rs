use approx::assert_relative_eq;

use crate::body::Body;
use crate::error::NbodyError;
use crate::forces::gravity::{acceleration_towards, pair_potential};
use crate::forces::{DirectGravity, ForceModel, G};
use crate::state::SystemState;

fn ball(mass: f64, position: [f64; 2]) -> Body {
    Body::new(mass, position, [0.0, 0.0], 1e9).unwrap()
}

#[test]
fn test_acceleration_magnitude_and_direction() {
    let body = ball(1.0, [0.0, 0.0]);
    let source = ball(5e10, [0.0, 100.0]);

    let a = acceleration_towards(&body, &source, G).unwrap();

    // Points down the screen, towards the source
    assert_eq!(a.x, 0.0);
    assert!(a.y > 0.0);
    assert_relative_eq!(a.magnitude(), G * 5e10 / 1e4, max_relative = 1e-12);
}

#[test]
fn test_newton_third_law() {
    let state = SystemState::with_bodies([ball(2e12, [100.0, 100.0]), ball(3e12, [160.0, 180.0])]);
    let gravity = DirectGravity::new();

    let a0 = gravity.acceleration(0, &state).unwrap();
    let a1 = gravity.acceleration(1, &state).unwrap();

    let net = a0 * 2e12 + a1 * 3e12;
    assert!(net.magnitude() < 1e-12 * (a0 * 2e12).magnitude());
}

#[test]
fn test_acceleration_sums_all_other_bodies() {
    // Equal pulls from left and right cancel
    let state = SystemState::with_bodies([
        ball(1e12, [0.0, 0.0]),
        ball(1e12, [-50.0, 0.0]),
        ball(1e12, [50.0, 0.0]),
    ]);

    let a = DirectGravity::new().acceleration(0, &state).unwrap();
    assert!(a.magnitude() < 1e-20);
}

#[test]
fn test_lone_body_feels_nothing() {
    let state = SystemState::with_bodies([ball(1e12, [10.0, 10.0])]);

    let a = DirectGravity::new().acceleration(0, &state).unwrap();
    assert_eq!(a.magnitude(), 0.0);
    assert_eq!(DirectGravity::new().potential_energy(&state).unwrap(), 0.0);
}

#[test]
fn test_potential_energy_counts_each_pair_once() {
    let bodies = [
        ball(1e10, [0.0, 0.0]),
        ball(2e10, [30.0, 40.0]),
        ball(3e10, [0.0, 100.0]),
    ];
    let state = SystemState::with_bodies(bodies);

    let expected = pair_potential(&state.bodies[0], &state.bodies[1], G).unwrap()
        + pair_potential(&state.bodies[0], &state.bodies[2], G).unwrap()
        + pair_potential(&state.bodies[1], &state.bodies[2], G).unwrap();

    let pe = DirectGravity::new().potential_energy(&state).unwrap();
    assert_relative_eq!(pe, expected, max_relative = 1e-12);
    assert!(pe < 0.0);
}

#[test]
fn test_custom_constant_scales_linearly() {
    let state = SystemState::with_bodies([ball(1e12, [0.0, 0.0]), ball(1e12, [20.0, 0.0])]);

    let physical = DirectGravity::new().acceleration(0, &state).unwrap();
    let boosted = DirectGravity::with_constant(10.0 * G)
        .acceleration(0, &state)
        .unwrap();

    assert_relative_eq!(boosted.x, 10.0 * physical.x, max_relative = 1e-12);
}

#[test]
fn test_coincident_bodies_are_an_error() {
    let state = SystemState::with_bodies([ball(1e12, [5.0, 5.0]), ball(1e12, [5.0, 5.0])]);
    let gravity = DirectGravity::new();

    assert!(matches!(
        gravity.acceleration(0, &state),
        Err(NbodyError::CoincidentBodies { .. })
    ));
    assert!(matches!(
        gravity.potential_energy(&state),
        Err(NbodyError::CoincidentBodies { .. })
    ));
}
