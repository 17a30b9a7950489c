//! Core domain: camera, fixed-step scheduling, and shared primitives.

mod timer;

#[cfg(test)]
mod tests;

pub use timer::StepTimer;

use bevy::prelude::*;

/// World units are rendered at this many pixels.
pub const PIXELS_PER_UNIT: f32 = 48.0;

/// Simulation steps per second for the character update.
pub const FIXED_STEP_HZ: f64 = 60.0;

/// Ordering of the per-character work inside one fixed step.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepSet {
    /// Weapon and ability cooldowns.
    Timers,
    /// Attack-dash launch and termination.
    Combat,
    /// Platform policy, walk, dash, jump.
    Locomotion,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_STEP_HZ))
            .insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .configure_sets(
                FixedUpdate,
                (StepSet::Timers, StepSet::Combat, StepSet::Locomotion).chain(),
            )
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 2.0, 0.0).with_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
    ));
}
