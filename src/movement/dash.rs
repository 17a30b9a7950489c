//! Movement domain: timed dash that overrides normal physics.

use bevy::prelude::*;

use crate::core::StepTimer;
use crate::movement::body::{BodyMode, PhysicsBody};
use crate::movement::locomotion::APPROX_EPSILON;
use crate::movement::{MovementStatus, MovementTuning};

/// What the dash machine did this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashStep {
    Idle,
    Started,
    /// Active window still running; velocity was overridden.
    Sustained,
    /// Active window closed and physics restored; no new dash started.
    Ended,
    /// Active window closed and a new dash started in the same step.
    Chained,
}

/// Dash state for one character.
///
/// Both deferred effects (end of the active window, end of the cooldown)
/// are timers ticked at the top of [`Self::update`]. Within one step the
/// order is: tick, end a finished dash, sustain an active dash, and only
/// then consider a new activation.
#[derive(Component, Debug, Clone)]
pub struct DashState {
    status: MovementStatus,
    locked_direction: Vec2,
    is_dashing: bool,
    can_dash: bool,
    activation_time: Option<f32>,
    active: StepTimer,
    cooldown: StepTimer,
}

impl DashState {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            status: MovementStatus::Normal,
            locked_direction: Vec2::ZERO,
            is_dashing: false,
            can_dash: true,
            activation_time: None,
            active: StepTimer::finished(tuning.dash_duration),
            cooldown: StepTimer::finished(tuning.dash_cooldown),
        }
    }

    pub fn status(&self) -> MovementStatus {
        self.status
    }

    pub fn is_dashing(&self) -> bool {
        self.is_dashing
    }

    pub fn can_dash(&self) -> bool {
        self.can_dash
    }

    pub fn locked_direction(&self) -> Vec2 {
        self.locked_direction
    }

    /// Elapsed simulation time of the most recent activation.
    pub fn activation_time(&self) -> Option<f32> {
        self.activation_time
    }

    /// Advance the active window and the cooldown without touching the
    /// body. Used on steps where the character is suspended, so the
    /// cooldown keeps running in real time.
    pub fn tick_timers(&mut self, dt: f32) {
        self.active.tick(dt, false);
        self.cooldown.tick(dt, false);

        if self.is_dashing && self.active.is_done() {
            self.is_dashing = false;
        }
        if !self.can_dash && self.cooldown.is_done() {
            self.can_dash = true;
        }
    }

    pub fn update(
        &mut self,
        dt: f32,
        now: f32,
        dash_input: Vec2,
        tuning: &MovementTuning,
        body: &mut impl PhysicsBody,
    ) -> DashStep {
        self.tick_timers(dt);

        let mut ended = false;
        if self.status == MovementStatus::Dashing {
            if self.is_dashing {
                body.set_velocity(self.locked_direction * tuning.dash_speed);
                return DashStep::Sustained;
            }

            body.set_body_mode(BodyMode::Dynamic);
            body.set_gravity_scale(tuning.gravity_scale);
            self.status = MovementStatus::Normal;
            ended = true;
            debug!("Dash ended");
        }

        let direction = if dash_input.length() < APPROX_EPSILON {
            Vec2::ZERO
        } else {
            dash_input.normalize_or_zero()
        };
        if direction == Vec2::ZERO || !self.can_dash {
            return if ended { DashStep::Ended } else { DashStep::Idle };
        }

        self.start(direction, now, tuning, body);
        if ended {
            DashStep::Chained
        } else {
            DashStep::Started
        }
    }

    fn start(
        &mut self,
        direction: Vec2,
        now: f32,
        tuning: &MovementTuning,
        body: &mut impl PhysicsBody,
    ) {
        self.locked_direction = direction;
        self.is_dashing = true;
        self.can_dash = false;
        self.activation_time = Some(now);
        self.active.reset();
        self.cooldown.reset();
        self.status = MovementStatus::Dashing;

        body.set_body_mode(tuning.dash_body_mode);
        body.set_gravity_scale(0.0);
        body.set_velocity(direction * tuning.dash_speed);

        debug!(
            "Dash started: direction=({:.2}, {:.2}), t={:.3}",
            direction.x, direction.y, now
        );
    }
}
