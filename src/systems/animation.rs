//! Walk-cycle animation system.
//!
//! Runs once per fixed step after physics: advances each
//! [`WalkAnimation`](crate::components::animation::WalkAnimation) while its
//! entity has movement intent and copies the resulting frame into the
//! entity's [`Sprite`](crate::components::sprite::Sprite).
use bevy_ecs::prelude::*;

use crate::components::animation::WalkAnimation;
use crate::components::inputcontrolled::Movement;
use crate::components::sprite::Sprite;
use crate::resources::fixedtimestep::FixedTimestep;

pub fn walk_animation(
    timestep: Res<FixedTimestep>,
    mut query: Query<(&mut WalkAnimation, &mut Sprite, Option<&Movement>)>,
) {
    let dt = timestep.step();
    for (mut animation, mut sprite, movement) in query.iter_mut() {
        let moving = movement.is_some_and(|m| m.is_moving());
        animation.advance(dt, moving);
        let frame = animation.frame();
        if sprite.frame != frame {
            sprite.frame = frame;
        }
    }
}
