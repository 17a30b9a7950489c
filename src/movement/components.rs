//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Serialize;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Solid ground the character can stand and jump from
    Ground,
    /// Ground that also ends an attack dash on contact
    DashGround,
    /// One-way platforms the character can drop through
    Platform,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Hostile characters
    Enemy,
    /// Player hitboxes (damage enemies)
    PlayerHitbox,
}

#[derive(Component, Debug)]
pub struct Player;

/// How the character came to be (or not be) on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GroundedStatus {
    #[default]
    Grounded,
    /// Set by a successful jump; only ground contact replaces it.
    AirborneFromJump,
    /// Left the ground without jumping.
    AirborneFromFall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MovementStatus {
    #[default]
    Normal,
    Dashing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn direction(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Left => Vec2::NEG_X,
        }
    }
}

/// Raw per-character input, written by the input layer and normalized by
/// the character step.
#[derive(Component, Debug, Default, Clone)]
pub struct LocomotionInput {
    /// Horizontal and vertical movement intent.
    pub movement: Vec2,
    /// Jump button held this step.
    pub jump: bool,
    /// Requested dash direction, zero when no dash is requested.
    pub dash: Vec2,
}

/// Collision layers for the player body, optionally ignoring one-way
/// platforms.
pub fn player_collision_layers(pass_through_platforms: bool) -> CollisionLayers {
    if pass_through_platforms {
        CollisionLayers::new(
            GameLayer::Player,
            [
                GameLayer::Ground,
                GameLayer::DashGround,
                GameLayer::Wall,
                GameLayer::Enemy,
            ],
        )
    } else {
        CollisionLayers::new(
            GameLayer::Player,
            [
                GameLayer::Ground,
                GameLayer::DashGround,
                GameLayer::Platform,
                GameLayer::Wall,
                GameLayer::Enemy,
            ],
        )
    }
}
