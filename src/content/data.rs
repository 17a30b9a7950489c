//! Content domain: serde definitions for the character tuning file.
//!
//! Vectors are written as `(x, y)` tuples so the file reads naturally in RON.

use serde::{Deserialize, Serialize};

use crate::movement::BodyMode;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Root of `assets/data/character_tuning.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CharacterTuningFile {
    pub schema_version: u32,
    pub movement: TuningDef,
    pub shotgun: ShotgunDef,
    pub animation: AnimationDef,
    pub arena: ArenaDef,
}

impl Default for CharacterTuningFile {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            movement: TuningDef::default(),
            shotgun: ShotgunDef::default(),
            animation: AnimationDef::default(),
            arena: ArenaDef::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningDef {
    pub max_move_speed: (f32, f32),
    pub move_acceleration: (f32, f32),
    pub deceleration_percentage: f32,
    pub jump_force: f32,
    pub jump_cooldown: f32,
    pub coyote_time: f32,
    pub total_jumps: u32,
    pub dash_speed: f32,
    pub dash_cooldown: f32,
    pub dash_duration: f32,
    pub dash_body_mode: BodyMode,
    pub gravity_scale: f32,
    pub body_mass: f32,
}

impl Default for TuningDef {
    fn default() -> Self {
        Self {
            max_move_speed: (10.0, 0.0),
            move_acceleration: (60.0, 0.0),
            deceleration_percentage: 0.95,
            jump_force: 12.0,
            jump_cooldown: 0.5,
            coyote_time: 0.5,
            total_jumps: 1,
            dash_speed: 20.0,
            dash_cooldown: 2.0,
            dash_duration: 0.5,
            dash_body_mode: BodyMode::Dynamic,
            gravity_scale: 0.75,
            body_mass: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShotgunDef {
    pub push_power: f32,
    pub dash_damage: f32,
    pub alt_fire_cooldown: f32,
    pub arming_delay: f32,
    pub max_attack_dash: f32,
}

impl Default for ShotgunDef {
    fn default() -> Self {
        Self {
            push_power: 20.0,
            dash_damage: 3.0,
            alt_fire_cooldown: 1.5,
            arming_delay: 0.15,
            max_attack_dash: 1.2,
        }
    }
}

/// Animator parameter names. Leave a name out to stop publishing it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationDef {
    pub speed_x: Option<String>,
    pub speed_y: Option<String>,
    pub jump: Option<String>,
    pub attack_dash: Option<String>,
    pub positive_params_only: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaDef {
    pub seed: u64,
    pub dummy_count: u32,
    pub dummy_health: f32,
}

impl Default for ArenaDef {
    fn default() -> Self {
        Self {
            seed: 7,
            dummy_count: 4,
            dummy_health: 2.0,
        }
    }
}
