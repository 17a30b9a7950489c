//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event emitted when an attack dash damages a hostile
#[derive(Debug)]
pub struct DashHitEvent {
    pub attacker: Entity,
    pub target: Entity,
    pub amount: f32,
    pub lethal: bool,
}

impl Message for DashHitEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
