//! Movement domain: the per-step character update.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::CombatSignal;
use crate::movement::{
    AnimationParams, AnimationSink, AvianBody, DashState, DashStep, GroundSensor, JumpStep,
    Locomotion, LocomotionInput, MovementTuning, OverlapQuery, ParameterAnimator, PhysicsBody,
    Player,
};

/// What one character did in one fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterStep {
    /// Input disabled: only the dash timers advanced.
    Suspended,
    Active { dash: DashStep, jump: JumpStep },
}

/// Read-only inputs to one character step.
pub(crate) struct StepContext<'a, Q: OverlapQuery> {
    pub dt: f32,
    pub now: f32,
    pub tuning: &'a MovementTuning,
    pub params: &'a AnimationParams,
    pub overlaps: &'a Q,
    pub origin: Vec2,
    /// Mirrors [`CombatSignal::can_input`] for the stepped character.
    pub input_enabled: bool,
}

/// Walk, dash and jump for one character, in that order.
///
/// The dash runs after walking so its velocity override wins, and the jump
/// runs last but is held back while a dash is active. While input is
/// disabled nothing touches the body, pending dash requests are dropped,
/// and only the dash timers keep running.
pub(crate) fn step_character<Q: OverlapQuery>(
    ctx: &StepContext<'_, Q>,
    input: &mut LocomotionInput,
    locomotion: &mut Locomotion,
    dash: &mut DashState,
    sensor: &mut GroundSensor,
    mut animator: Option<&mut dyn AnimationSink>,
    body: &mut impl PhysicsBody,
) -> CharacterStep {
    let dash_input = std::mem::take(&mut input.dash);

    if !ctx.input_enabled {
        dash.tick_timers(ctx.dt);
        return CharacterStep::Suspended;
    }

    let movement = input.movement.normalize_or_zero();
    let grounded = sensor.is_grounded(ctx.overlaps, ctx.origin);

    locomotion.update_facing(movement);
    ctx.params
        .publish_walk(animator.as_deref_mut(), body.velocity());
    locomotion.update_walk(movement, ctx.tuning, body);

    let dash_step = dash.update(ctx.dt, ctx.now, dash_input, ctx.tuning, body);

    let allow_jump = !dash.is_dashing();
    let jump_step =
        locomotion.update_jumping(ctx.dt, input.jump, grounded, allow_jump, ctx.tuning, body);
    ctx.params
        .publish_jump(animator.as_deref_mut(), locomotion.grounded_status());

    CharacterStep::Active {
        dash: dash_step,
        jump: jump_step,
    }
}

pub(crate) fn step_characters(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    params: Res<AnimationParams>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &mut LocomotionInput,
            &mut Locomotion,
            &mut DashState,
            &mut GroundSensor,
            &CombatSignal,
            &mut LinearVelocity,
            &mut RigidBody,
            &mut GravityScale,
            Option<&mut ParameterAnimator>,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (
        transform,
        mut input,
        mut locomotion,
        mut dash,
        mut sensor,
        signal,
        mut velocity,
        mut rigid_body,
        mut gravity_scale,
        mut animator,
    ) in &mut query
    {
        let ctx = StepContext {
            dt,
            now: time.elapsed_secs(),
            tuning: &tuning,
            params: &params,
            overlaps: &spatial_query,
            origin: transform.translation.truncate(),
            input_enabled: signal.can_input(),
        };
        let mut body = AvianBody::new(
            &mut velocity,
            &mut rigid_body,
            &mut gravity_scale,
            tuning.body_mass,
            dt,
        );

        step_character(
            &ctx,
            &mut input,
            &mut locomotion,
            &mut dash,
            &mut sensor,
            animator
                .as_deref_mut()
                .map(|animator| animator as &mut dyn AnimationSink),
            &mut body,
        );
    }
}
