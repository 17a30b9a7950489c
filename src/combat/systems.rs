//! Combat domain: combat systems for input, the attack dash, damage, and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::combat::events::{DashHitEvent, DeathEvent};
use crate::combat::trigger::{DashHit, resolve_dash_hit};
use crate::combat::weapon::launch_direction;
use crate::combat::{
    AttackDash, CombatInput, CombatSignal, DashHitbox, Health, Hostile, ShotgunWeapon,
    dash_hitbox,
};
use crate::movement::{
    AnimationParams, AnimationSink, AvianBody, DashState, GroundSensor, Locomotion, MovementTuning,
    ParameterAnimator, Player,
};

pub(crate) fn read_combat_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut input: ResMut<CombatInput>,
) {
    // Alt fire stays latched until a fixed step consumes it
    if mouse.just_pressed(MouseButton::Right) || keyboard.just_pressed(KeyCode::KeyL) {
        input.alt_fire = true;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    input.aim_point = window
        .cursor_position()
        .and_then(|cursor| camera.viewport_to_world_2d(camera_transform, cursor).ok());
}

pub(crate) fn tick_weapons(time: Res<Time>, mut query: Query<&mut ShotgunWeapon>) {
    let dt = time.delta_secs();
    for mut weapon in &mut query {
        weapon.tick(dt);
    }
}

pub(crate) fn process_alt_fire(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    params: Res<AnimationParams>,
    mut input: ResMut<CombatInput>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Locomotion,
            &DashState,
            &mut ShotgunWeapon,
            &mut AttackDash,
            &mut CombatSignal,
            &mut LinearVelocity,
            &mut RigidBody,
            &mut GravityScale,
            Option<&mut ParameterAnimator>,
        ),
        With<Player>,
    >,
) {
    if !input.alt_fire {
        return;
    }
    input.alt_fire = false;
    let dt = time.delta_secs();

    for (
        player,
        transform,
        locomotion,
        dash,
        mut weapon,
        mut attack,
        mut signal,
        mut velocity,
        mut rigid_body,
        mut gravity_scale,
        mut animator,
    ) in &mut query
    {
        // The regular dash owns the velocity until its window closes
        if dash.is_dashing() {
            continue;
        }

        let position = transform.translation.truncate();
        let direction = match input.aim_point {
            Some(target) => launch_direction(position, target, locomotion.facing()),
            None => locomotion.facing().direction(),
        };

        let mut body = AvianBody::new(
            &mut velocity,
            &mut rigid_body,
            &mut gravity_scale,
            tuning.body_mass,
            dt,
        );
        if !weapon.alt_fire(direction, &mut attack, &mut signal, &mut body) {
            debug!(
                "Alt fire rejected: cooldown_remaining={:.2}, shotgun_dashing={}",
                weapon.alt_fire_remaining(),
                signal.is_shotgun_dashing()
            );
            continue;
        }

        let hitbox = commands.spawn(dash_hitbox(player)).id();
        if let Some(stale) = attack.attach_hitbox(hitbox) {
            commands.entity(stale).despawn();
        }

        params.publish_attack_dash(
            animator
                .as_deref_mut()
                .map(|animator| animator as &mut dyn AnimationSink),
        );
    }
}

pub(crate) fn update_attack_dashes(
    mut commands: Commands,
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut GroundSensor, &mut AttackDash, &mut CombatSignal), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, mut sensor, mut attack, mut signal) in &mut query {
        if !attack.is_active() {
            continue;
        }
        // Only armed dashes care about the surface
        let on_dash_surface = attack.is_armed()
            && sensor.is_on_dash_surface(&spatial_query, transform.translation.truncate());
        if !attack.update(dt, on_dash_surface, &mut signal) {
            continue;
        }
        if let Some(hitbox) = attack.take_hitbox() {
            commands.entity(hitbox).despawn();
        }
    }
}

pub(crate) fn detect_dash_hits(
    mut collision_events: MessageReader<CollisionStart>,
    mut hit_events: MessageWriter<DashHitEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    hitbox_query: Query<&DashHitbox>,
    mut owner_query: Query<(&CombatSignal, &mut ShotgunWeapon)>,
    mut hostile_query: Query<Option<&mut Health>, With<Hostile>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hitbox_entity, target) in pairs {
            let Ok(hitbox) = hitbox_query.get(hitbox_entity) else {
                continue;
            };
            let Ok(mut health) = hostile_query.get_mut(target) else {
                continue;
            };
            let Ok((signal, mut weapon)) = owner_query.get_mut(hitbox.owner) else {
                continue;
            };

            let (amount, lethal) =
                match resolve_dash_hit(signal, &mut weapon, health.as_deref_mut()) {
                    DashHit::Ignored => continue,
                    DashHit::Damaged { amount } => (amount, false),
                    DashHit::Lethal { amount } => (amount, true),
                };

            hit_events.write(DashHitEvent {
                attacker: hitbox.owner,
                target,
                amount,
                lethal,
            });

            if lethal {
                debug!("Lethal dash hit on {:?}: alt fire cooldown refunded", target);
            }
            // Only the hit that emptied the pool reports the death
            if amount > 0.0 && health.as_deref().is_some_and(Health::is_dead) {
                death_events.write(DeathEvent { entity: target });
            }
        }
    }
}

/// Tint hostiles struck by the attack dash by how much health they have left
pub(crate) fn flash_dash_hits(
    mut hit_events: MessageReader<DashHitEvent>,
    mut query: Query<(&mut Sprite, &Health), With<Hostile>>,
) {
    for event in hit_events.read() {
        if let Ok((mut sprite, health)) = query.get_mut(event.target) {
            sprite.color = health.hit_tint();
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    query: Query<Entity, With<Hostile>>,
) {
    for event in death_events.read() {
        if let Ok(entity) = query.get(event.entity) {
            info!("Hostile {:?} defeated", entity);
            commands.entity(entity).despawn();
        }
    }
}
