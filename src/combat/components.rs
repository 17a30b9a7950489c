//! Combat domain: health and hitbox components.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

/// A little larger than the player body so grazing contacts still count.
const HITBOX_SIZE: Vec2 = Vec2::new(1.0, 1.7);

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Share of the pool left, in `[0, 1]`. An empty pool reads as zero.
    pub fn remaining_fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    /// Hit flash that deepens toward red as the pool drains.
    pub fn hit_tint(&self) -> Color {
        let fade = 0.2 + 0.5 * self.remaining_fraction();
        Color::srgb(1.0, fade, fade)
    }
}

/// Marks entities the attack dash is allowed to hurt
#[derive(Component, Debug)]
pub struct Hostile;

/// Sensor shape that reports attack-dash contacts for `owner`.
///
/// Lives only while one attack dash is active, so hostiles already
/// touching the player at launch still produce a contact start.
#[derive(Component, Debug)]
pub struct DashHitbox {
    pub owner: Entity,
}

/// Child sensor for one attack dash, centered on `owner`.
pub fn dash_hitbox(owner: Entity) -> impl Bundle {
    (
        DashHitbox { owner },
        ChildOf(owner),
        Transform::default(),
        Collider::rectangle(HITBOX_SIZE.x, HITBOX_SIZE.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy]),
    )
}
