//! Movement domain: walk forces and jump arbitration.

use bevy::prelude::*;

use crate::core::StepTimer;
use crate::movement::body::{ForceMode, PhysicsBody};
use crate::movement::{Facing, GroundedStatus, MovementTuning};

/// Values closer to zero than this count as zero.
pub const APPROX_EPSILON: f32 = 1e-5;

pub fn approx_zero(value: f32) -> bool {
    value.abs() < APPROX_EPSILON
}

/// Sign with a dead zone: `0` for values that are approximately zero.
fn sign(value: f32) -> i8 {
    if approx_zero(value) {
        0
    } else if value > 0.0 {
        1
    } else {
        -1
    }
}

/// Whether walking along one axis may add force.
///
/// Reversing or starting from rest is always allowed; pushing further in
/// the direction of travel is only allowed below `max_speed`.
pub fn can_move_in_direction(input: f32, velocity: f32, max_speed: f32) -> bool {
    if sign(input) != sign(velocity) {
        return true;
    }
    velocity.abs() < max_speed
}

/// Per-axis walk force for this step. The caller adds it to the body.
pub fn walk_force(input: Vec2, velocity: Vec2, tuning: &MovementTuning) -> Vec2 {
    let mut force = Vec2::ZERO;

    if approx_zero(input.x) && !approx_zero(velocity.x) {
        // Brake proportionally to current speed.
        force.x = -velocity.x * tuning.deceleration_percentage * tuning.move_acceleration.x;
    } else if can_move_in_direction(input.x, velocity.x, tuning.max_move_speed.x) {
        force.x = input.x * tuning.move_acceleration.x;
    }

    if can_move_in_direction(input.y, velocity.y, tuning.max_move_speed.y) {
        force.y = input.y * tuning.move_acceleration.y;
    }

    force
}

/// Dropping through one-way platforms while holding down.
pub fn should_pass_through_platforms(movement: Vec2) -> bool {
    !approx_zero(movement.y) && movement.y < 0.0
}

/// Classification of a held button between two consecutive steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpEdge {
    /// Up last step, down now.
    Pressed,
    /// Down both steps.
    Held,
    /// Down last step, up now.
    Released,
    /// Up both steps.
    Idle,
}

impl JumpEdge {
    pub fn classify(was_held: bool, held: bool) -> Self {
        match (was_held, held) {
            (false, true) => JumpEdge::Pressed,
            (true, true) => JumpEdge::Held,
            (true, false) => JumpEdge::Released,
            (false, false) => JumpEdge::Idle,
        }
    }

    pub fn is_down(self) -> bool {
        matches!(self, JumpEdge::Pressed | JumpEdge::Held)
    }
}

/// One jump per press.
///
/// The latch arms on any step where the button is up and a jump would be
/// legal, and fires on a step where the button is down, the latch is
/// armed, and a jump is legal. Holding the button never re-arms it.
#[derive(Debug, Clone, Default)]
pub struct JumpLatch {
    armed: bool,
    was_held: bool,
}

impl JumpLatch {
    /// Feed this step's button state. Returns true when a jump should fire.
    pub fn update(&mut self, held: bool, can_jump: bool) -> bool {
        let edge = JumpEdge::classify(self.was_held, held);
        self.was_held = held;

        if !edge.is_down() {
            if can_jump {
                self.armed = true;
            }
            return false;
        }

        self.armed && can_jump
    }

    pub fn consume(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// What jump arbitration did this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpStep {
    Jumped { from_ground: bool },
    Grounded,
    Airborne,
}

/// Grounded classification, jump budget and cooldowns for one character.
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    grounded_status: GroundedStatus,
    remaining_jumps: u32,
    total_jumps: u32,
    jump_cooldown: StepTimer,
    coyote: StepTimer,
    latch: JumpLatch,
    facing: Facing,
}

impl Locomotion {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            grounded_status: GroundedStatus::Grounded,
            remaining_jumps: tuning.total_jumps,
            total_jumps: tuning.total_jumps,
            jump_cooldown: StepTimer::finished(tuning.jump_cooldown),
            coyote: StepTimer::from_seconds(tuning.coyote_time),
            latch: JumpLatch::default(),
            facing: Facing::Right,
        }
    }

    pub fn grounded_status(&self) -> GroundedStatus {
        self.grounded_status
    }

    pub fn remaining_jumps(&self) -> u32 {
        self.remaining_jumps
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Coyote window bookkeeping. Tracked but never consulted by
    /// [`Self::can_jump`].
    pub fn coyote_remaining(&self) -> f32 {
        self.coyote.remaining_secs()
    }

    pub fn jump_cooldown_done(&self) -> bool {
        self.jump_cooldown.is_done()
    }

    pub fn can_jump(&self, grounded: bool) -> bool {
        self.jump_cooldown.is_done() && (grounded || self.remaining_jumps > 0)
    }

    pub fn update_facing(&mut self, movement: Vec2) {
        match sign(movement.x) {
            1 => self.facing = Facing::Right,
            -1 => self.facing = Facing::Left,
            _ => {}
        }
    }

    /// Apply this step's walk force. Returns the force that was added.
    pub fn update_walk(
        &self,
        movement: Vec2,
        tuning: &MovementTuning,
        body: &mut impl PhysicsBody,
    ) -> Vec2 {
        let force = walk_force(movement, body.velocity(), tuning);
        body.add_force(force, ForceMode::Continuous);
        force
    }

    /// Run jump arbitration for one step.
    ///
    /// `allow_activation` is false while a dash owns the velocity, so the
    /// dash override stays the last velocity write of the step.
    pub fn update_jumping(
        &mut self,
        dt: f32,
        jump_held: bool,
        grounded: bool,
        allow_activation: bool,
        tuning: &MovementTuning,
        body: &mut impl PhysicsBody,
    ) -> JumpStep {
        self.jump_cooldown.tick(dt, false);
        self.coyote.tick(dt, false);

        let can_jump = self.can_jump(grounded);
        let fire = self.latch.update(jump_held, can_jump) && allow_activation;

        if fire {
            if !grounded {
                self.remaining_jumps = self.remaining_jumps.saturating_sub(1);
            }

            let velocity = body.velocity();
            body.set_velocity(Vec2::new(velocity.x, 0.0));
            body.add_force(Vec2::Y * tuning.jump_force, ForceMode::Impulse);

            self.grounded_status = GroundedStatus::AirborneFromJump;
            self.latch.consume();
            self.coyote.reset();
            self.jump_cooldown.reset();

            debug!(
                "Jump: from_ground={}, remaining_jumps={}",
                grounded, self.remaining_jumps
            );
            JumpStep::Jumped {
                from_ground: grounded,
            }
        } else if grounded {
            if self.grounded_status != GroundedStatus::Grounded {
                debug!("Landed: remaining_jumps reset to {}", self.total_jumps);
            }
            self.remaining_jumps = self.total_jumps;
            self.grounded_status = GroundedStatus::Grounded;
            self.coyote.reset();
            JumpStep::Grounded
        } else {
            if self.grounded_status == GroundedStatus::Grounded {
                self.grounded_status = GroundedStatus::AirborneFromFall;
                debug!("Left ground without jumping");
            }
            JumpStep::Airborne
        }
    }
}
