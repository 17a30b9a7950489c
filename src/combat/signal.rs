//! Combat domain: the narrow channel between the character and its weapon.

use bevy::prelude::*;

/// What the weapon may change about the character, and what the dash
/// damage trigger may read.
///
/// The weapon starts and ends the attack dash (which also gates input);
/// the trigger only ever reads [`Self::is_shotgun_dashing`].
#[derive(Component, Debug, Clone)]
pub struct CombatSignal {
    can_input: bool,
    shotgun_dashing: bool,
}

impl Default for CombatSignal {
    fn default() -> Self {
        Self {
            can_input: true,
            shotgun_dashing: false,
        }
    }
}

impl CombatSignal {
    /// When false the whole character step is suspended.
    pub fn can_input(&self) -> bool {
        self.can_input
    }

    pub fn is_shotgun_dashing(&self) -> bool {
        self.shotgun_dashing
    }

    pub fn disable_input(&mut self) {
        self.can_input = false;
    }

    pub fn enable_input(&mut self) {
        self.can_input = true;
    }

    pub(crate) fn begin_attack_dash(&mut self) {
        self.shotgun_dashing = true;
        self.disable_input();
    }

    pub(crate) fn end_attack_dash(&mut self) {
        self.shotgun_dashing = false;
        self.enable_input();
    }
}
