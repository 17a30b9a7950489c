//! Combat domain: tuning and input resources.

use bevy::prelude::*;

/// Shotgun alternate fire and attack dash tunables.
#[derive(Resource, Debug, Clone)]
pub struct ShotgunTuning {
    /// Launch impulse of the attack dash.
    pub push_power: f32,
    /// Damage dealt to each hostile touched during the attack dash.
    pub dash_damage: f32,
    /// Seconds between alternate fires.
    pub alt_fire_cooldown: f32,
    /// Seconds after launch before dash ground can end the attack dash.
    pub arming_delay: f32,
    /// Hard limit on attack dash length.
    pub max_attack_dash: f32,
}

impl Default for ShotgunTuning {
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

/// Latched combat input, sampled every frame and consumed on the next
/// fixed step.
#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub alt_fire: bool,
    /// Cursor position in world space, if the cursor is over the window.
    pub aim_point: Option<Vec2>,
}
