//! Movement domain: walking, jumping, dashing, and ground sensing.
//!
//! Everything that changes the character's velocity runs in one fixed-step
//! system so the write order stays walk, dash, jump.

mod animation;
mod body;
mod bootstrap;
mod components;
mod dash;
mod locomotion;
mod resources;
mod sensor;
mod systems;

pub use animation::{AnimationParams, AnimationSink, ParameterAnimator, TriggerFlash};
pub use body::{AvianBody, BodyMode, ForceMode, PhysicsBody};
#[cfg(test)]
pub(crate) use body::MockBody;
pub use components::{
    Facing, GameLayer, GroundedStatus, LocomotionInput, MovementStatus, Player,
    player_collision_layers,
};
pub use dash::{DashState, DashStep};
pub use locomotion::{
    JumpEdge, JumpLatch, JumpStep, Locomotion, can_move_in_direction, walk_force,
};
pub use resources::MovementTuning;
pub use sensor::{GroundSensor, OverlapQuery, SensorLayers};

use bevy::prelude::*;

use crate::core::StepSet;
use crate::movement::animation::apply_animator_tint;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{read_input, step_characters, update_platform_pass_through};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<AnimationParams>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, (read_input, apply_animator_tint))
            .add_systems(
                FixedUpdate,
                (update_platform_pass_through, step_characters)
                    .chain()
                    .in_set(StepSet::Locomotion),
            );
    }
}
