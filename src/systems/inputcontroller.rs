//! Input mapper.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) once
//! per frame and rebuilds the movement intent and thrust of every
//! [`InputControlled`] entity. Intent is overwritten each frame, never
//! accumulated, and its magnitude is clamped to 1.
//!
//! Global keys are handled here too: quit (or a window close) stops the
//! game, reset triggers a [`ResetLevelEvent`] and debug a
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::{Direction, WalkAnimation};
use crate::components::collision::CollisionFlags;
use crate::components::inputcontrolled::{InputControlled, Movement};
use crate::components::rigidbody::{RigidBody, THRUST_FORCE};
use crate::events::mission::ResetLevelEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;

pub fn input_mapper(
    input: Res<InputState>,
    mut gamestate: ResMut<GameState>,
    mut commands: Commands,
    mut query: Query<(
        &InputControlled,
        &mut Movement,
        &mut RigidBody,
        Option<&CollisionFlags>,
        Option<&mut WalkAnimation>,
    )>,
) {
    if input.quit.active || input.close_requested {
        gamestate.request_quit();
    }
    if input.reset.just_pressed {
        commands.trigger(ResetLevelEvent {});
    }
    if input.debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }

    for (controls, mut movement, mut rigidbody, flags, animation) in query.iter_mut() {
        let mut direction = Vec2::ZERO;
        let mut thrust = Vec2::ZERO;
        if input.left.active {
            direction += controls.left_movement;
            thrust += controls.left_thrust;
        }
        if input.right.active {
            direction += controls.right_movement;
            thrust += controls.right_thrust;
        }
        if input.up.active {
            direction += controls.up_movement;
            thrust += controls.up_thrust;
        }
        if input.down.active {
            direction += controls.down_movement;
            thrust += controls.down_thrust;
        }

        movement.direction = direction.clamp_length_max(1.0);
        rigidbody.set_force_value(THRUST_FORCE, thrust);

        let grounded = flags.is_some_and(|f| f.bottom);
        if input.jump.just_pressed && grounded {
            movement.jump_requested = true;
        }

        if let Some(mut animation) = animation {
            // Horizontal facing wins on diagonals
            let facing = if direction.x < 0.0 {
                Some(Direction::Left)
            } else if direction.x > 0.0 {
                Some(Direction::Right)
            } else if direction.y > 0.0 {
                Some(Direction::Up)
            } else if direction.y < 0.0 {
                Some(Direction::Down)
            } else {
                None
            };
            if let Some(facing) = facing {
                animation.face(facing);
            }
        }
    }
}
