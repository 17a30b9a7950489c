//! Combat domain: shotgun alternate fire and the attack dash it launches.

use bevy::prelude::*;

use crate::combat::{CombatSignal, ShotgunTuning};
use crate::core::StepTimer;
use crate::movement::{Facing, ForceMode, PhysicsBody};

#[derive(Component, Debug, Clone)]
pub struct ShotgunWeapon {
    pub push_power: f32,
    pub dash_damage: f32,
    alt_fire_cooldown: StepTimer,
    /// Set when a lethal dash hit refunded the cooldown.
    pub dash_reset: bool,
}

impl ShotgunWeapon {
    pub fn from_tuning(tuning: &ShotgunTuning) -> Self {
        Self {
            push_power: tuning.push_power,
            dash_damage: tuning.dash_damage,
            alt_fire_cooldown: StepTimer::finished(tuning.alt_fire_cooldown),
            dash_reset: false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.alt_fire_cooldown.tick(dt, false);
    }

    pub fn can_alt_fire(&self) -> bool {
        self.alt_fire_cooldown.is_done()
    }

    pub fn alt_fire_remaining(&self) -> f32 {
        self.alt_fire_cooldown.remaining_secs()
    }

    /// Clear the alternate-fire cooldown so the attack dash can be chained.
    pub fn reset_alt_fire(&mut self) {
        self.alt_fire_cooldown.finish();
        self.dash_reset = true;
    }

    /// Launch the attack dash along `direction`. Returns false when the
    /// cooldown is running or an attack dash is already in progress.
    pub fn alt_fire(
        &mut self,
        direction: Vec2,
        attack: &mut AttackDash,
        signal: &mut CombatSignal,
        body: &mut impl PhysicsBody,
    ) -> bool {
        if !self.can_alt_fire() || signal.is_shotgun_dashing() {
            return false;
        }

        body.set_velocity(Vec2::ZERO);
        body.add_force(direction * self.push_power, ForceMode::Impulse);
        signal.begin_attack_dash();
        attack.start();

        self.alt_fire_cooldown.reset();
        self.dash_reset = false;

        debug!(
            "Attack dash launched: direction=({:.2}, {:.2}), power={}",
            direction.x, direction.y, self.push_power
        );
        true
    }
}

/// Horizontal launch direction from `position` toward `target`.
/// Falls back to `facing` when the target is level with the character.
pub fn launch_direction(position: Vec2, target: Vec2, facing: Facing) -> Vec2 {
    let offset = Vec2::new(target.x - position.x, 0.0);
    let direction = offset.normalize_or_zero();
    if direction == Vec2::ZERO {
        facing.direction()
    } else {
        direction
    }
}

/// Lifetime of one attack dash, plus the hitbox spawned for it.
#[derive(Component, Debug, Clone)]
pub struct AttackDash {
    active: bool,
    arming: StepTimer,
    limit: StepTimer,
    hitbox: Option<Entity>,
}

impl AttackDash {
    pub fn from_tuning(tuning: &ShotgunTuning) -> Self {
        Self {
            active: false,
            arming: StepTimer::from_seconds(tuning.arming_delay),
            limit: StepTimer::from_seconds(tuning.max_attack_dash),
            hitbox: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether dash ground would end the dash now.
    pub fn is_armed(&self) -> bool {
        self.active && self.arming.is_done()
    }

    pub fn hitbox(&self) -> Option<Entity> {
        self.hitbox
    }

    /// Record the hitbox spawned for the current dash. Returns a previous
    /// hitbox that was never released, if any.
    pub fn attach_hitbox(&mut self, hitbox: Entity) -> Option<Entity> {
        self.hitbox.replace(hitbox)
    }

    /// Release the hitbox once the dash is over. Always `None` while the
    /// dash is still active.
    pub fn take_hitbox(&mut self) -> Option<Entity> {
        if self.active {
            return None;
        }
        self.hitbox.take()
    }

    fn start(&mut self) {
        self.active = true;
        self.arming.reset();
        self.limit.reset();
    }

    /// Advance one step. Ends the dash on armed dash-ground contact or when
    /// the limit runs out. Returns true on the step the dash ends.
    pub fn update(&mut self, dt: f32, on_dash_surface: bool, signal: &mut CombatSignal) -> bool {
        if !self.active {
            return false;
        }
        self.arming.tick(dt, false);
        self.limit.tick(dt, false);

        let landed = self.arming.is_done() && on_dash_surface;
        if !landed && !self.limit.is_done() {
            return false;
        }

        self.active = false;
        signal.end_attack_dash();
        debug!(
            "Attack dash ended: landed={}, elapsed={:.3}",
            landed,
            self.limit.elapsed_secs()
        );
        true
    }
}
