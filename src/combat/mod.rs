//! Combat domain: shotgun alternate fire, the attack dash, and dash damage.

mod components;
mod events;
mod resources;
mod signal;
mod systems;
mod trigger;
mod weapon;

pub use components::{DashHitbox, Health, Hostile, dash_hitbox};
pub use events::{DashHitEvent, DeathEvent};
pub use resources::{CombatInput, ShotgunTuning};
pub use signal::CombatSignal;
pub use trigger::{DashHit, resolve_dash_hit};
pub use weapon::{AttackDash, ShotgunWeapon, launch_direction};

use bevy::prelude::*;

use crate::combat::systems::{
    detect_dash_hits, flash_dash_hits, process_alt_fire, process_deaths, read_combat_input,
    tick_weapons, update_attack_dashes,
};
use crate::core::StepSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShotgunTuning>()
            .init_resource::<CombatInput>()
            .add_message::<DashHitEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    read_combat_input,
                    (detect_dash_hits, flash_dash_hits, process_deaths).chain(),
                ),
            )
            .add_systems(FixedUpdate, tick_weapons.in_set(StepSet::Timers))
            .add_systems(
                FixedUpdate,
                (process_alt_fire, update_attack_dashes)
                    .chain()
                    .in_set(StepSet::Combat),
            );
    }
}
