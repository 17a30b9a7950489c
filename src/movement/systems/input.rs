//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::combat::CombatSignal;
use crate::movement::{Facing, Locomotion, LocomotionInput, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut LocomotionInput, &Locomotion, &CombatSignal), With<Player>>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (down drops through platforms)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }
    let axis = Vec2::new(x, y);

    let jump_held = keyboard.pressed(KeyCode::Space) || keyboard.pressed(KeyCode::KeyK);
    let dash_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);

    for (mut input, locomotion, signal) in &mut query {
        input.movement = axis;
        input.jump = jump_held;

        // Dash requests stay latched until a fixed step consumes them
        if let Some(direction) =
            dash_request(dash_pressed, signal.can_input(), axis, locomotion.facing())
        {
            input.dash = direction;
        }
    }
}

/// Direction to latch for a dash press, falling back to facing when no
/// direction is held. Presses while input is disabled are dropped.
pub(crate) fn dash_request(
    pressed: bool,
    can_input: bool,
    axis: Vec2,
    facing: Facing,
) -> Option<Vec2> {
    if !pressed || !can_input {
        return None;
    }
    Some(if axis == Vec2::ZERO {
        facing.direction()
    } else {
        axis
    })
}
