//! Validation for tuning values before they reach the state machines.

use thiserror::Error;

use super::data::{AnimationDef, ArenaDef, ShotgunDef, TuningDef};
use crate::arena::ArenaConfig;
use crate::combat::ShotgunTuning;
use crate::movement::{AnimationParams, MovementTuning};

/// Highest braking fraction the walk model is tuned for.
pub const MAX_DECELERATION_PERCENTAGE: f32 = 0.95;

/// A rejected tunable, with the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("deceleration_percentage must be within [0, 0.95] (got {0})")]
    DecelerationOutOfRange(f32),
}

/// NaN and the infinities. Reported once, ahead of any sign check.
fn check_finite(errors: &mut Vec<TuningError>, field: &'static str, value: f32) -> bool {
    if value.is_finite() {
        return true;
    }
    errors.push(TuningError::NotFinite { field, value });
    false
}

/// Finite and `value >= 0`.
fn check_non_negative(errors: &mut Vec<TuningError>, field: &'static str, value: f32) {
    if check_finite(errors, field, value) && value < 0.0 {
        errors.push(TuningError::Negative { field, value });
    }
}

/// Finite and `value > 0`.
fn check_positive(errors: &mut Vec<TuningError>, field: &'static str, value: f32) {
    if check_finite(errors, field, value) && value <= 0.0 {
        errors.push(TuningError::NotPositive { field, value });
    }
}

/// Check movement tuning. Returns every problem found, empty if valid.
pub fn validate_movement(tuning: &MovementTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    check_non_negative(&mut errors, "max_move_speed.x", tuning.max_move_speed.x);
    check_non_negative(&mut errors, "max_move_speed.y", tuning.max_move_speed.y);
    check_non_negative(&mut errors, "move_acceleration.x", tuning.move_acceleration.x);
    check_non_negative(&mut errors, "move_acceleration.y", tuning.move_acceleration.y);

    let decel = tuning.deceleration_percentage;
    if !(0.0..=MAX_DECELERATION_PERCENTAGE).contains(&decel) {
        errors.push(TuningError::DecelerationOutOfRange(decel));
    }

    check_non_negative(&mut errors, "jump_force", tuning.jump_force);
    check_non_negative(&mut errors, "jump_cooldown", tuning.jump_cooldown);
    check_non_negative(&mut errors, "coyote_time", tuning.coyote_time);
    check_non_negative(&mut errors, "dash_speed", tuning.dash_speed);
    check_positive(&mut errors, "dash_duration", tuning.dash_duration);
    check_positive(&mut errors, "dash_cooldown", tuning.dash_cooldown);
    check_non_negative(&mut errors, "gravity_scale", tuning.gravity_scale);
    check_positive(&mut errors, "body_mass", tuning.body_mass);

    errors
}

pub fn validate_shotgun(tuning: &ShotgunTuning) -> Vec<TuningError> {
    let mut errors = Vec::new();

    check_non_negative(&mut errors, "push_power", tuning.push_power);
    check_non_negative(&mut errors, "dash_damage", tuning.dash_damage);
    check_non_negative(&mut errors, "alt_fire_cooldown", tuning.alt_fire_cooldown);
    check_non_negative(&mut errors, "arming_delay", tuning.arming_delay);
    check_positive(&mut errors, "max_attack_dash", tuning.max_attack_dash);

    errors
}

impl TuningDef {
    pub fn into_tuning(self) -> Result<MovementTuning, Vec<TuningError>> {
        let tuning = MovementTuning {
            max_move_speed: self.max_move_speed.into(),
            move_acceleration: self.move_acceleration.into(),
            deceleration_percentage: self.deceleration_percentage,
            jump_force: self.jump_force,
            jump_cooldown: self.jump_cooldown,
            coyote_time: self.coyote_time,
            total_jumps: self.total_jumps,
            dash_speed: self.dash_speed,
            dash_cooldown: self.dash_cooldown,
            dash_duration: self.dash_duration,
            dash_body_mode: self.dash_body_mode,
            gravity_scale: self.gravity_scale,
            body_mass: self.body_mass,
        };
        let errors = validate_movement(&tuning);
        if errors.is_empty() {
            Ok(tuning)
        } else {
            Err(errors)
        }
    }
}

impl ShotgunDef {
    pub fn into_tuning(self) -> Result<ShotgunTuning, Vec<TuningError>> {
        let tuning = ShotgunTuning {
            push_power: self.push_power,
            dash_damage: self.dash_damage,
            alt_fire_cooldown: self.alt_fire_cooldown,
            arming_delay: self.arming_delay,
            max_attack_dash: self.max_attack_dash,
        };
        let errors = validate_shotgun(&tuning);
        if errors.is_empty() {
            Ok(tuning)
        } else {
            Err(errors)
        }
    }
}

impl From<AnimationDef> for AnimationParams {
    fn from(def: AnimationDef) -> Self {
        Self {
            speed_x: def.speed_x,
            speed_y: def.speed_y,
            jump: def.jump,
            attack_dash: def.attack_dash,
            positive_params_only: def.positive_params_only,
        }
    }
}

impl From<ArenaDef> for ArenaConfig {
    fn from(def: ArenaDef) -> Self {
        Self {
            seed: def.seed,
            dummy_count: def.dummy_count,
            dummy_health: def.dummy_health,
        }
    }
}
