//! Movement domain: tuning resource.

use bevy::prelude::*;

use crate::movement::body::BodyMode;

/// Per-character locomotion tunables. Built through
/// [`crate::content::validate_movement`] so out-of-range values are
/// rejected at load time rather than clamped during play.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Speed cap per axis. `y` caps vertical drift, not jump height.
    pub max_move_speed: Vec2,
    /// Walk force per axis. `y` is vertical drift, not the jump force.
    pub move_acceleration: Vec2,
    /// Fraction of `move_acceleration.x` used to brake with no input.
    pub deceleration_percentage: f32,
    pub jump_force: f32,
    pub jump_cooldown: f32,
    pub coyote_time: f32,
    /// Extra jumps available while airborne. The ground jump is free.
    pub total_jumps: u32,
    pub dash_speed: f32,
    pub dash_cooldown: f32,
    pub dash_duration: f32,
    /// Body type while dashing. `Kinematic` ignores static geometry.
    pub dash_body_mode: BodyMode,
    /// Gravity scale restored after a dash.
    pub gravity_scale: f32,
    pub body_mass: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_move_speed: Vec2::new(10.0, 0.0),
            move_acceleration: Vec2::new(60.0, 0.0),
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

impl MovementTuning {
    /// Apex height of a single jump under `gravity` (positive, units/s²).
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        let launch_speed = self.jump_force / self.body_mass;
        let effective_gravity = gravity * self.gravity_scale;
        if effective_gravity <= 0.0 {
            return f32::INFINITY;
        }
        launch_speed * launch_speed / (2.0 * effective_gravity)
    }

    /// Distance covered by one full dash.
    pub fn dash_distance(&self) -> f32 {
        self.dash_speed * self.dash_duration
    }
}
