use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use nbody::SystemConfig;

use crate::config::Arena;
use crate::generation::*;

#[test]
fn test_random_ball_is_in_bounds_and_at_rest() {
    let arena = Arena::default();
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..200 {
        let ball = random_ball(&arena, &mut rng).unwrap();

        assert!((BASE_MASS_KG..2.0 * BASE_MASS_KG).contains(&ball.mass));
        assert!((100.0..=900.0).contains(&ball.position.x));
        assert!((100.0..=600.0).contains(&ball.position.y));
        assert_eq!(ball.position.x.fract(), 0.0);
        assert_eq!(ball.position.y.fract(), 0.0);
        assert_eq!(ball.velocity.magnitude(), 0.0);
        assert_eq!(ball.density, BALL_DENSITY);
        assert_eq!(ball.spin, 0.0);
    }
}

#[test]
fn test_same_seed_same_system() {
    let arena = Arena::default();

    let a = create_system(10, &arena, &mut ChaChaRng::seed_from_u64(42), SystemConfig::default())
        .unwrap();
    let b = create_system(10, &arena, &mut ChaChaRng::seed_from_u64(42), SystemConfig::default())
        .unwrap();

    assert_eq!(a.to_records(), b.to_records());
}

#[test]
fn test_different_seeds_differ() {
    let arena = Arena::default();

    let a = create_system(10, &arena, &mut ChaChaRng::seed_from_u64(1), SystemConfig::default())
        .unwrap();
    let b = create_system(10, &arena, &mut ChaChaRng::seed_from_u64(2), SystemConfig::default())
        .unwrap();

    assert_ne!(a.to_records(), b.to_records());
}

#[test]
fn test_positions_are_distinct() {
    // 3x3 grid of admissible points, all of them taken
    let arena = Arena::new(202, 202);
    let mut rng = ChaChaRng::seed_from_u64(3);

    let system = create_system(9, &arena, &mut rng, SystemConfig::default()).unwrap();

    let mut positions: Vec<(i64, i64)> = system
        .bodies()
        .iter()
        .map(|b| (b.position.x as i64, b.position.y as i64))
        .collect();
    positions.sort();
    positions.dedup();
    assert_eq!(positions.len(), 9);
}

#[test]
fn test_overfull_arena_is_rejected() {
    let arena = Arena::new(200, 200);
    let mut rng = ChaChaRng::seed_from_u64(3);

    let result = create_system(2, &arena, &mut rng, SystemConfig::default());

    assert!(matches!(
        result,
        Err(GenerationError::ArenaFull {
            requested: 2,
            capacity: 1
        })
    ));
}

#[test]
fn test_config_is_passed_through() {
    let config = SystemConfig {
        collisions: false,
        ..SystemConfig::default()
    };
    let mut rng = ChaChaRng::seed_from_u64(5);

    let system = create_system(4, &Arena::default(), &mut rng, config).unwrap();

    assert_eq!(system.config(), &config);
    assert_eq!(system.body_count(), 4);
}
