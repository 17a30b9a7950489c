//! Movement domain: the velocity/force channel of the physics engine.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How a force is applied to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Accumulated over the step, scaled by the step length.
    Continuous,
    /// One-time velocity change.
    Impulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyMode {
    #[default]
    Dynamic,
    Kinematic,
}

/// The slice of a rigid body the character state machines are allowed to
/// touch.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    /// Direct override. Only the dash and the jump's vertical reset use it.
    fn set_velocity(&mut self, velocity: Vec2);
    fn add_force(&mut self, force: Vec2, mode: ForceMode);
    fn set_body_mode(&mut self, mode: BodyMode);
    fn set_gravity_scale(&mut self, scale: f32);
}

/// [`PhysicsBody`] over avian2d components for one fixed step.
///
/// Forces are folded into `LinearVelocity` immediately, so a later
/// `set_velocity` in the same step pre-empts them.
pub struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    rigid_body: &'a mut RigidBody,
    gravity_scale: &'a mut GravityScale,
    mass: f32,
    dt: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        velocity: &'a mut LinearVelocity,
        rigid_body: &'a mut RigidBody,
        gravity_scale: &'a mut GravityScale,
        mass: f32,
        dt: f32,
    ) -> Self {
        Self {
            velocity,
            rigid_body,
            gravity_scale,
            mass,
            dt,
        }
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn add_force(&mut self, force: Vec2, mode: ForceMode) {
        let delta = match mode {
            ForceMode::Continuous => force / self.mass * self.dt,
            ForceMode::Impulse => force / self.mass,
        };
        self.velocity.0 += delta;
    }

    fn set_body_mode(&mut self, mode: BodyMode) {
        let unchanged = matches!(
            (mode, &*self.rigid_body),
            (BodyMode::Dynamic, RigidBody::Dynamic) | (BodyMode::Kinematic, RigidBody::Kinematic)
        );
        if unchanged {
            return;
        }
        *self.rigid_body = match mode {
            BodyMode::Dynamic => RigidBody::Dynamic,
            BodyMode::Kinematic => RigidBody::Kinematic,
        };
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }
}

/// Records what the state machines asked of the body. Impulses change
/// velocity immediately; continuous forces are only accumulated.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MockBody {
    pub velocity: Vec2,
    pub accumulated_force: Vec2,
    pub impulses: Vec<Vec2>,
    pub body_mode: BodyMode,
    pub gravity_scale: f32,
}

#[cfg(test)]
impl MockBody {
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            gravity_scale: 0.75,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl PhysicsBody for MockBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn add_force(&mut self, force: Vec2, mode: ForceMode) {
        match mode {
            ForceMode::Continuous => self.accumulated_force += force,
            ForceMode::Impulse => {
                self.impulses.push(force);
                self.velocity += force;
            }
        }
    }

    fn set_body_mode(&mut self, mode: BodyMode) {
        self.body_mode = mode;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }
}
