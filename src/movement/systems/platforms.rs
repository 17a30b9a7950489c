//! Movement domain: one-way platform pass-through.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::CombatSignal;
use crate::movement::locomotion::should_pass_through_platforms;
use crate::movement::{LocomotionInput, Player, player_collision_layers};

/// Holding down drops the character through platforms; releasing makes
/// them solid again.
pub(crate) fn update_platform_pass_through(
    mut query: Query<(&LocomotionInput, &CombatSignal, &mut CollisionLayers), With<Player>>,
) {
    for (input, signal, mut layers) in &mut query {
        if !signal.can_input() {
            continue;
        }
        let pass_through = should_pass_through_platforms(input.movement);
        let wanted = player_collision_layers(pass_through);
        if *layers != wanted {
            *layers = wanted;
            debug!("Platform pass-through: {}", pass_through);
        }
    }
}
