//! Input-controlled movement components.
//!
//! - [`InputControlled`] – what each directional key does to the entity
//! - [`Movement`] – the movement intent the input mapper writes each frame
//!   and the physics step reads
//!
//! See [`crate::systems::inputcontroller`] for the mapping itself.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Per-direction movement intent and thrust derived from keyboard input.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Movement intent contributed by each direction key.
    pub up_movement: Vec2,
    pub down_movement: Vec2,
    pub left_movement: Vec2,
    pub right_movement: Vec2,
    /// Acceleration contributed by each direction key. It only builds up on
    /// an axis the same key leaves without movement intent, so
    /// `symmetric(0.0, thrust)` gives pure thrust control.
    pub up_thrust: Vec2,
    pub down_thrust: Vec2,
    pub left_thrust: Vec2,
    pub right_thrust: Vec2,
}

impl InputControlled {
    /// Symmetric controls: `movement` intent and `thrust` acceleration along
    /// each pressed direction.
    pub fn symmetric(movement: f32, thrust: f32) -> Self {
        Self {
            up_movement: Vec2::new(0.0, movement),
            down_movement: Vec2::new(0.0, -movement),
            left_movement: Vec2::new(-movement, 0.0),
            right_movement: Vec2::new(movement, 0.0),
            up_thrust: Vec2::new(0.0, thrust),
            down_thrust: Vec2::new(0.0, -thrust),
            left_thrust: Vec2::new(-thrust, 0.0),
            right_thrust: Vec2::new(thrust, 0.0),
        }
    }
}

impl Default for InputControlled {
    fn default() -> Self {
        Self::symmetric(0.5, 1.0)
    }
}

/// Movement intent for the current frame.
///
/// `direction` is rebuilt from input every frame and never exceeds unit
/// length. On each axis where it is non-zero, the physics step sets the
/// velocity to `direction * speed` (a velocity target, not an additive term)
/// and does not integrate forces on that axis.
#[derive(Component, Clone, Copy, Debug)]
pub struct Movement {
    pub direction: Vec2,
    pub speed: f32,
    /// Upward velocity added by a jump.
    pub jump_power: f32,
    /// Set by the input mapper, consumed by the next physics step.
    pub jump_requested: bool,
}

impl Movement {
    pub fn new(speed: f32, jump_power: f32) -> Self {
        Self {
            direction: Vec2::ZERO,
            speed,
            jump_power,
            jump_requested: false,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.direction.length_squared() > 0.0
    }

    /// Velocity target on each axis, `None` where there is no intent.
    pub fn target_velocity(&self) -> (Option<f32>, Option<f32>) {
        let target = self.direction * self.speed;
        (
            (self.direction.x != 0.0).then_some(target.x),
            (self.direction.y != 0.0).then_some(target.y),
        )
    }
}
