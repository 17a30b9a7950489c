//! Debug tooling for tuning the character by feel.
//!
//! Features:
//! - F3 logs a JSON snapshot of the player's locomotion state
//! - F4 toggles an outline of the ground-check shape


use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{AttackDash, CombatSignal, ShotgunWeapon};
use crate::movement::{
    DashState, Facing, GroundSensor, GroundedStatus, Locomotion, MovementStatus, Player,
};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_sensor: bool,
}

/// Point-in-time view of the player for the F3 log.
#[derive(Debug, Clone, Serialize)]
pub struct LocomotionSnapshot {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub grounded_status: GroundedStatus,
    pub remaining_jumps: u32,
    pub coyote_remaining: f32,
    pub facing: Facing,
    pub movement_status: MovementStatus,
    pub is_dashing: bool,
    pub can_dash: bool,
    pub can_alt_fire: bool,
    pub attack_dashing: bool,
    pub can_input: bool,
}

impl LocomotionSnapshot {
    pub fn capture(
        position: Vec2,
        velocity: Vec2,
        locomotion: &Locomotion,
        dash: &DashState,
        weapon: &ShotgunWeapon,
        attack: &AttackDash,
        signal: &CombatSignal,
    ) -> Self {
        Self {
            position: position.into(),
            velocity: velocity.into(),
            grounded_status: locomotion.grounded_status(),
            remaining_jumps: locomotion.remaining_jumps(),
            coyote_remaining: locomotion.coyote_remaining(),
            facing: locomotion.facing(),
            movement_status: dash.status(),
            is_dashing: dash.is_dashing(),
            can_dash: dash.can_dash(),
            can_alt_fire: weapon.can_alt_fire(),
            attack_dashing: attack.is_active(),
            can_input: signal.can_input(),
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (log_snapshot, toggle_sensor_gizmo, draw_sensor_gizmo));
    }
}

fn log_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<
        (
            &Transform,
            &LinearVelocity,
            &Locomotion,
            &DashState,
            &ShotgunWeapon,
            &AttackDash,
            &CombatSignal,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (transform, velocity, locomotion, dash, weapon, attack, signal) in &query {
        let snapshot = LocomotionSnapshot::capture(
            transform.translation.truncate(),
            velocity.0,
            locomotion,
            dash,
            weapon,
            attack,
            signal,
        );
        match serde_json::to_string(&snapshot) {
            Ok(json) => info!("Player snapshot: {}", json),
            Err(e) => warn!("Failed to serialize player snapshot: {}", e),
        }
    }
}

fn toggle_sensor_gizmo(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F4) {
        state.show_sensor = !state.show_sensor;
        info!("Ground sensor gizmo: {}", state.show_sensor);
    }
}

fn draw_sensor_gizmo(
    state: Res<DebugState>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundSensor, &Locomotion), With<Player>>,
) {
    if !state.show_sensor {
        return;
    }

    for (transform, sensor, locomotion) in &query {
        let color = if locomotion.grounded_status() == GroundedStatus::Grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        let center = sensor.center(transform.translation.truncate());
        gizmos.rect_2d(Isometry2d::from_translation(center), sensor.size(), color);
    }
}
