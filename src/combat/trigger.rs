//! Combat domain: damage dealt by the attack dash on contact.

use crate::combat::{CombatSignal, Health, ShotgunWeapon};

/// Outcome of one attack-dash contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashHit {
    /// Not attack dashing, or the contact had no health.
    Ignored,
    Damaged { amount: f32 },
    /// The hit was lethal; the alternate-fire cooldown was refunded.
    Lethal { amount: f32 },
}

/// Apply attack-dash damage to one hostile contact.
///
/// Lethality is judged on health before the hit, so the cooldown refund
/// does not depend on how the damage itself resolves.
pub fn resolve_dash_hit(
    signal: &CombatSignal,
    weapon: &mut ShotgunWeapon,
    target: Option<&mut Health>,
) -> DashHit {
    if !signal.is_shotgun_dashing() {
        return DashHit::Ignored;
    }
    let Some(health) = target else {
        return DashHit::Ignored;
    };

    let lethal = health.current <= weapon.dash_damage;
    if lethal {
        weapon.reset_alt_fire();
    }
    let amount = health.take_damage(weapon.dash_damage);

    if lethal {
        DashHit::Lethal { amount }
    } else {
        DashHit::Damaged { amount }
    }
}
