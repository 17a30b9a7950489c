//! Arena domain: dummy placement.

use bevy::prelude::*;
use rand::Rng;

/// Half the floor width, in world units.
pub const ARENA_HALF_WIDTH: f32 = 14.0;
/// Height of the floor surface.
pub const FLOOR_TOP: f32 = -0.5;

/// Dummies keep this far from the player spawn at x = 0.
const SPAWN_CLEARANCE: f32 = 2.5;
const WALL_MARGIN: f32 = 1.0;

/// Pick `count` floor positions, never next to the player spawn.
pub fn dummy_positions(count: u32, rng: &mut impl Rng) -> Vec<Vec2> {
    let span = ARENA_HALF_WIDTH - WALL_MARGIN - SPAWN_CLEARANCE;

    (0..count)
        .map(|_| {
            let offset: f32 = rng.random_range(0.0..span);
            let side = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            Vec2::new(side * (SPAWN_CLEARANCE + offset), FLOOR_TOP + 0.5)
        })
        .collect()
}
