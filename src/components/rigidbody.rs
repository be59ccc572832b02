//! Kinematic body component with multiple named acceleration forces.
//!
//! The [`RigidBody`] component stores velocity and the named acceleration
//! forces acting on an entity. The lander uses three of them:
//! - `gravity` – constant pull towards the ground
//! - `drift` – constant sideways push
//! - `thrust` – rewritten every frame by the input mapper

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

pub const GRAVITY_FORCE: &str = "gravity";
pub const DRIFT_FORCE: &str = "drift";
pub const THRUST_FORCE: &str = "thrust";

/// Kinematic body storing velocity and multiple named acceleration forces.
///
/// Written by the input mapper, consumed by
/// [`step_body`](crate::systems::physics::step_body).
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Named accelerations in world units per second squared. The total
    /// acceleration is their sum.
    pub forces: FxHashMap<String, Vec2>,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Body affected by the constant lander forces.
    pub fn with_base_forces(gravity: f32, drift: f32) -> Self {
        let mut rb = Self::new();
        rb.set_force_value(GRAVITY_FORCE, Vec2::new(0.0, gravity));
        rb.set_force_value(DRIFT_FORCE, Vec2::new(drift, 0.0));
        rb
    }

    /// Overwrite the value of a force, creating it when missing.
    pub fn set_force_value(&mut self, name: &str, value: Vec2) {
        match self.forces.get_mut(name) {
            Some(force) => *force = value,
            None => {
                self.forces.insert(name.to_string(), value);
            }
        }
    }

    /// Calculate the total acceleration from all forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .fold(Vec2::ZERO, |total, force| total + *force)
    }

    /// Stop the body and clear the per-frame thrust.
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        if let Some(thrust) = self.forces.get_mut(THRUST_FORCE) {
            *thrust = Vec2::ZERO;
        }
    }
}
