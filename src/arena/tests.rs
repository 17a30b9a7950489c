//! Arena domain: tests for dummy placement.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{ARENA_HALF_WIDTH, ArenaConfig, FLOOR_TOP, dummy_positions};

#[test]
fn test_same_seed_same_layout() {
    let config = ArenaConfig::default();
    let first = dummy_positions(6, &mut ChaCha8Rng::seed_from_u64(config.seed));
    let second = dummy_positions(6, &mut ChaCha8Rng::seed_from_u64(config.seed));
    assert_eq!(first, second);
}

#[test]
fn test_dummies_stay_on_floor_and_clear_of_spawn() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let positions = dummy_positions(64, &mut rng);

    assert_eq!(positions.len(), 64);
    for position in positions {
        assert!(position.x.abs() >= 2.5);
        assert!(position.x.abs() < ARENA_HALF_WIDTH);
        assert!(position.y > FLOOR_TOP);
    }
}

#[test]
fn test_zero_dummies() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert!(dummy_positions(0, &mut rng).is_empty());
}
