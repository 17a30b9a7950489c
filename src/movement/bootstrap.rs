//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackDash, CombatSignal, ShotgunTuning, ShotgunWeapon};
use crate::movement::{
    DashState, GroundSensor, Locomotion, LocomotionInput, MovementTuning,
    ParameterAnimator, Player, SensorLayers, TriggerFlash, player_collision_layers,
};

const BODY_SIZE: Vec2 = Vec2::new(0.8, 1.6);
const SENSOR_SIZE: Vec2 = Vec2::new(0.7, 0.1);
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    shotgun: Res<ShotgunTuning>,
    gravity: Res<Gravity>,
) {
    let sensor_offset = Vec2::new(0.0, -BODY_SIZE.y * 0.5);

    commands.spawn((
        // Identity & Movement
        (
            Player,
            LocomotionInput::default(),
            Locomotion::new(&tuning),
            DashState::new(&tuning),
            GroundSensor::new(SENSOR_SIZE, sensor_offset, SensorLayers::default()),
            ParameterAnimator::default(),
            TriggerFlash::default(),
        ),
        // Combat
        (
            CombatSignal::default(),
            ShotgunWeapon::from_tuning(&shotgun),
            AttackDash::from_tuning(&shotgun),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(BODY_SIZE),
            ..default()
        },
        Transform::from_translation(SPAWN_POSITION),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(BODY_SIZE.x, BODY_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            Mass(tuning.body_mass),
            Friction::new(0.0),
            player_collision_layers(false),
        ),
    ));

    info!(
        "Spawning player: jump_height={:.2}, dash_distance={:.2}, total_jumps={}",
        tuning.single_jump_height(gravity.0.length()),
        tuning.dash_distance(),
        tuning.total_jumps
    );
}
