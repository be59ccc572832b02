//! Mission lifecycle events and observers.
//!
//! - [`MissionEndedEvent`] is triggered by the physics step the moment the
//!   outcome leaves `Ongoing`.
//! - [`ResetLevelEvent`] puts the player back on the spawn point and starts a
//!   new run; it is the only way a terminal outcome is cleared.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::WalkAnimation;
use crate::components::collision::{CollisionFlags, EntityKind};
use crate::components::inputcontrolled::Movement;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::level::LevelLayout;
use crate::resources::mission::MissionOutcome;

/// Event fired once per run when the mission fails or succeeds.
#[derive(Event, Debug, Clone, Copy)]
pub struct MissionEndedEvent {
    pub outcome: MissionOutcome,
    pub player: Entity,
}

/// Request to restart the run.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResetLevelEvent {}

/// Observer that reports the end of a mission.
pub fn mission_ended_observer(trigger: On<MissionEndedEvent>) {
    let event = trigger.event();
    match event.outcome.banner() {
        Some((message, _)) => info!("{} (player {:?})", message, event.player),
        None => info!("Mission ended without an outcome (player {:?})", event.player),
    }
}

/// Observer that restores every player to the level spawn point, resets
/// the outcome to `Ongoing` and drops any pending physics time.
pub fn reset_level_observer(
    _trigger: On<ResetLevelEvent>,
    layout: Res<LevelLayout>,
    mut outcome: ResMut<MissionOutcome>,
    mut timestep: ResMut<FixedTimestep>,
    mut players: Query<(
        &EntityKind,
        &mut MapPosition,
        &mut RigidBody,
        Option<&mut Movement>,
        Option<&mut CollisionFlags>,
        Option<&mut WalkAnimation>,
    )>,
) {
    for (kind, mut position, mut rigidbody, movement, flags, animation) in players.iter_mut() {
        if *kind != EntityKind::Player {
            continue;
        }
        position.pos = layout.player_spawn;
        rigidbody.halt();
        if let Some(mut movement) = movement {
            movement.jump_requested = false;
        }
        if let Some(mut flags) = flags {
            flags.clear();
        }
        if let Some(mut animation) = animation {
            animation.advance(0.0, false);
        }
    }
    outcome.reset();
    timestep.reset();
    info!("Level reset, player back at {:?}", layout.player_spawn);
}
