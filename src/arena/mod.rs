//! Arena domain: sandbox room geometry and training dummies.

mod layout;
#[cfg(test)]
mod tests;

pub use layout::{ARENA_HALF_WIDTH, FLOOR_TOP, dummy_positions};

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::combat::{Health, Hostile};
use crate::movement::GameLayer;

/// Sandbox settings, loaded with the rest of the tuning.
#[derive(Resource, Debug, Clone)]
pub struct ArenaConfig {
    /// Seed for dummy placement so layouts are reproducible.
    pub seed: u64,
    pub dummy_count: u32,
    pub dummy_health: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            dummy_count: 4,
            dummy_health: 2.0,
        }
    }
}

#[derive(Component, Debug)]
pub struct ArenaGeometry;

/// Respawns the dummies when all of them are gone.
#[derive(Resource, Debug, Default)]
struct DummyWave(u64);

const DUMMY_SIZE: Vec2 = Vec2::new(0.8, 0.8);

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaConfig>()
            .init_resource::<DummyWave>()
            .add_systems(Startup, (spawn_arena, spawn_dummies))
            .add_systems(Update, respawn_dummies);
    }
}

fn spawn_block(commands: &mut Commands, position: Vec2, size: Vec2, layer: GameLayer, color: Color) {
    commands.spawn((
        ArenaGeometry,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, [GameLayer::Player, GameLayer::Enemy]),
    ));
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let floor_color = Color::srgb(0.4, 0.5, 0.4);
    let ledge_color = Color::srgb(0.45, 0.45, 0.35);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Floor ends attack dashes
    spawn_block(
        &mut commands,
        Vec2::new(0.0, FLOOR_TOP - 0.5),
        Vec2::new(ARENA_HALF_WIDTH * 2.0, 1.0),
        GameLayer::DashGround,
        floor_color,
    );

    // Walls
    for side in [-1.0, 1.0] {
        spawn_block(
            &mut commands,
            Vec2::new(side * (ARENA_HALF_WIDTH + 0.5), 5.0),
            Vec2::new(1.0, 12.0),
            GameLayer::Wall,
            wall_color,
        );
    }

    // Solid ledges: standable, but attack dashes pass over them
    spawn_block(
        &mut commands,
        Vec2::new(-10.0, 1.5),
        Vec2::new(4.0, 0.5),
        GameLayer::Ground,
        ledge_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(10.0, 1.5),
        Vec2::new(4.0, 0.5),
        GameLayer::Ground,
        ledge_color,
    );

    // One-way platforms
    spawn_block(
        &mut commands,
        Vec2::new(-4.5, 3.5),
        Vec2::new(3.0, 0.25),
        GameLayer::Platform,
        platform_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(4.5, 3.5),
        Vec2::new(3.0, 0.25),
        GameLayer::Platform,
        platform_color,
    );
    spawn_block(
        &mut commands,
        Vec2::new(0.0, 6.0),
        Vec2::new(2.5, 0.25),
        GameLayer::Platform,
        platform_color,
    );
}

fn spawn_dummy_wave(commands: &mut Commands, config: &ArenaConfig, wave: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed.wrapping_add(wave));
    let positions = dummy_positions(config.dummy_count, &mut rng);

    for position in &positions {
        commands.spawn((
            Hostile,
            Health::new(config.dummy_health),
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(DUMMY_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Dynamic,
            Collider::rectangle(DUMMY_SIZE.x, DUMMY_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Ground,
                    GameLayer::DashGround,
                    GameLayer::Platform,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::PlayerHitbox,
                ],
            ),
        ));
    }

    info!(
        "Spawned dummy wave {}: count={}, health={}",
        wave,
        positions.len(),
        config.dummy_health
    );
}

fn spawn_dummies(mut commands: Commands, config: Res<ArenaConfig>, wave: Res<DummyWave>) {
    spawn_dummy_wave(&mut commands, &config, wave.0);
}

fn respawn_dummies(
    mut commands: Commands,
    config: Res<ArenaConfig>,
    mut wave: ResMut<DummyWave>,
    hostiles: Query<(), With<Hostile>>,
) {
    if config.dummy_count == 0 || !hostiles.is_empty() {
        return;
    }
    wave.0 += 1;
    spawn_dummy_wave(&mut commands, &config, wave.0);
}
