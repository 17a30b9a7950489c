//! Movement domain: animation parameters published by the character step.
//!
//! The character only pushes named parameters; what they look like on
//! screen is up to whoever reads the [`ParameterAnimator`]. Unset names and
//! a missing animator are both silent no-ops.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::movement::GroundedStatus;

/// Fire-and-forget sink for animation parameters.
pub trait AnimationSink {
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}

/// Parameter names the character publishes to. `None` or blank disables a
/// parameter.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationParams {
    pub speed_x: Option<String>,
    pub speed_y: Option<String>,
    pub jump: Option<String>,
    pub attack_dash: Option<String>,
    /// Publish speeds as absolute values.
    pub positive_params_only: bool,
}

fn configured(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|name| !name.trim().is_empty())
}

impl AnimationParams {
    pub fn publish_walk(&self, sink: Option<&mut (dyn AnimationSink + '_)>, velocity: Vec2) {
        let Some(sink) = sink else {
            return;
        };
        let value = if self.positive_params_only {
            velocity.abs()
        } else {
            velocity
        };
        if let Some(name) = configured(&self.speed_x) {
            sink.set_float(name, value.x);
        }
        if let Some(name) = configured(&self.speed_y) {
            sink.set_float(name, value.y);
        }
    }

    pub fn publish_jump(&self, sink: Option<&mut (dyn AnimationSink + '_)>, status: GroundedStatus) {
        let (Some(sink), Some(name)) = (sink, configured(&self.jump)) else {
            return;
        };
        sink.set_bool(name, status == GroundedStatus::AirborneFromJump);
    }

    pub fn publish_attack_dash(&self, sink: Option<&mut (dyn AnimationSink + '_)>) {
        let (Some(sink), Some(name)) = (sink, configured(&self.attack_dash)) else {
            return;
        };
        sink.set_trigger(name);
    }
}

/// In-game animator: keeps the latest value of each parameter and queues
/// triggers until something consumes them.
#[derive(Component, Debug, Default)]
pub struct ParameterAnimator {
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    pending_triggers: Vec<String>,
}

impl ParameterAnimator {
    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    pub fn take_triggers(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending_triggers)
    }
}

impl AnimationSink for ParameterAnimator {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.pending_triggers.push(name.to_string());
    }
}

/// Visual stand-in for the rendered animation: tints the sprite from the
/// published parameters and flashes on triggers.
#[derive(Component, Debug, Default)]
pub struct TriggerFlash(pub f32);

const FLASH_SECONDS: f32 = 0.15;

pub(crate) fn apply_animator_tint(
    time: Res<Time>,
    params: Res<AnimationParams>,
    mut query: Query<(&mut ParameterAnimator, &mut TriggerFlash, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (mut animator, mut flash, mut sprite) in &mut query {
        if !animator.take_triggers().is_empty() {
            flash.0 = FLASH_SECONDS;
        }
        if flash.0 > 0.0 {
            flash.0 -= dt;
            sprite.color = Color::srgb(1.0, 0.85, 0.4);
            continue;
        }

        let jumping = configured(&params.jump)
            .and_then(|name| animator.bool(name))
            .unwrap_or(false);
        let speed = configured(&params.speed_x)
            .and_then(|name| animator.float(name))
            .unwrap_or(0.0)
            .abs();

        let brightness = 0.75 + (speed / 40.0).min(0.2);
        sprite.color = if jumping {
            Color::srgb(0.7, 0.85, 1.0)
        } else {
            Color::srgb(brightness, brightness, brightness)
        };
    }
}
