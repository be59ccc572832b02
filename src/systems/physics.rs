//! Kinematic integration and AABB collision resolution.
//!
//! [`step_body`] advances one body by a single fixed step against a list of
//! static collidables:
//!
//! 1. movement intent sets velocity on the axes it is active on
//! 2. the other axes integrate `total_acceleration * dt`
//! 3. a pending jump adds its power to the vertical velocity
//! 4. the vertical axis is integrated and resolved
//! 5. the horizontal axis is integrated and resolved
//!
//! Resolving vertically first means a body that lands on a platform corner is
//! placed on top of it rather than pushed off the side. Every resolution
//! snaps the body so the two boxes are exactly tangent and zeroes velocity on
//! that axis. A body within [`CONTACT_SLOP`] of a box and moving into it is in
//! contact, so a resting body stays in contact however little it sinks in
//! one step.
//!
//! [`physics_step`] is the ECS system that feeds `step_body` and turns the
//! player's contacts into a [`MissionOutcome`].
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;
use smallvec::SmallVec;

use crate::components::boxcollider::{BoxCollider, CONTACT_SLOP};
use crate::components::collision::{CollisionFlags, ContactSide, EntityKind};
use crate::components::inputcontrolled::Movement;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::mission::MissionEndedEvent;
use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::mission::MissionOutcome;

/// Static obstacle snapshot taken before the bodies move.
#[derive(Debug, Clone, Copy)]
pub struct Collidable {
    pub entity: Entity,
    pub position: Vec2,
    pub collider: BoxCollider,
    pub kind: EntityKind,
}

/// One resolved contact, reported from the moving body's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub other: Entity,
    pub kind: EntityKind,
    pub side: ContactSide,
}

/// Outcome of a single [`step_body`] call.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub flags: CollisionFlags,
    /// Contacts in collidable order.
    pub contacts: SmallVec<[Contact; 4]>,
}

impl StepReport {
    fn push(&mut self, other: &Collidable, side: ContactSide) {
        self.flags.set(side);
        self.contacts.push(Contact {
            other: other.entity,
            kind: other.kind,
            side,
        });
    }
}

/// Whether a body is in contact with another along the axis being
/// resolved: penetrating, or within [`CONTACT_SLOP`] of it while moving
/// towards it.
fn in_contact(depth: f32, velocity: f32, other_is_ahead: bool) -> bool {
    let approaching = if other_is_ahead {
        velocity > 0.0
    } else {
        velocity < 0.0
    };
    depth > CONTACT_SLOP || (depth >= -CONTACT_SLOP && approaching)
}

/// Advance one body by `dt` and resolve it against `collidables`.
///
/// `self_entity` is skipped if it shows up in `collidables`.
pub fn step_body(
    self_entity: Option<Entity>,
    position: &mut Vec2,
    rigidbody: &mut RigidBody,
    collider: &BoxCollider,
    movement: Option<&mut Movement>,
    collidables: &[Collidable],
    dt: f32,
) -> StepReport {
    let mut report = StepReport::default();

    let acceleration = rigidbody.total_acceleration() * dt;
    let (target_x, target_y) = movement
        .as_deref()
        .map_or((None, None), Movement::target_velocity);
    rigidbody.velocity.x = target_x.unwrap_or(rigidbody.velocity.x + acceleration.x);
    rigidbody.velocity.y = target_y.unwrap_or(rigidbody.velocity.y + acceleration.y);
    if let Some(movement) = movement {
        if movement.jump_requested {
            rigidbody.velocity.y += movement.jump_power;
            movement.jump_requested = false;
        }
    }

    let half = collider.half_extents();
    let others = collidables
        .iter()
        .filter(|c| Some(c.entity) != self_entity && c.kind.is_collidable());

    // Vertical
    position.y += rigidbody.velocity.y * dt;
    for other in others.clone() {
        let depth = collider.depth(*position, &other.collider, other.position);
        let above = position.y >= other.position.y;
        if depth.x <= CONTACT_SLOP || !in_contact(depth.y, rigidbody.velocity.y, !above) {
            continue;
        }
        let reach = half.y + other.collider.half_extents().y;
        let falling = if rigidbody.velocity.y != 0.0 {
            rigidbody.velocity.y < 0.0
        } else {
            above
        };
        if falling {
            position.y = other.position.y + reach;
            report.push(other, ContactSide::Bottom);
        } else {
            position.y = other.position.y - reach;
            report.push(other, ContactSide::Top);
        }
        rigidbody.velocity.y = 0.0;
    }

    // Horizontal
    position.x += rigidbody.velocity.x * dt;
    for other in others {
        let depth = collider.depth(*position, &other.collider, other.position);
        let left_of = position.x < other.position.x;
        if depth.y <= CONTACT_SLOP || !in_contact(depth.x, rigidbody.velocity.x, left_of) {
            continue;
        }
        let reach = half.x + other.collider.half_extents().x;
        let moving_right = if rigidbody.velocity.x != 0.0 {
            rigidbody.velocity.x > 0.0
        } else {
            left_of
        };
        if moving_right {
            position.x = other.position.x - reach;
            report.push(other, ContactSide::Right);
        } else {
            position.x = other.position.x + reach;
            report.push(other, ContactSide::Left);
        }
        rigidbody.velocity.x = 0.0;
    }

    report
}

/// Run one fixed physics step for every rigid body.
///
/// Collidables (entities with a collider but no rigid body) are snapshotted
/// and sorted by entity so resolution order is stable. Player contacts feed
/// the mission outcome; the step that ends the mission triggers a
/// [`MissionEndedEvent`].
pub fn physics_step(
    timestep: Res<FixedTimestep>,
    mut outcome: ResMut<MissionOutcome>,
    mut commands: Commands,
    mut bodies: Query<(
        Entity,
        &EntityKind,
        &mut MapPosition,
        &mut RigidBody,
        &BoxCollider,
        Option<&mut Movement>,
        Option<&mut CollisionFlags>,
    )>,
    statics: Query<(Entity, &MapPosition, &BoxCollider, &EntityKind), Without<RigidBody>>,
) {
    let mut collidables: Vec<Collidable> = statics
        .iter()
        .filter(|(_, _, _, kind)| kind.is_collidable())
        .map(|(entity, position, collider, kind)| Collidable {
            entity,
            position: position.pos,
            collider: *collider,
            kind: *kind,
        })
        .collect();
    collidables.sort_by_key(|c| c.entity);

    let dt = timestep.step();
    for (entity, kind, mut position, mut rigidbody, collider, movement, flags) in bodies.iter_mut()
    {
        let report = step_body(
            Some(entity),
            &mut position.pos,
            &mut rigidbody,
            collider,
            movement.map(|m| m.into_inner()),
            &collidables,
            dt,
        );
        if let Some(mut flags) = flags {
            *flags = report.flags;
        }
        if *kind != EntityKind::Player {
            continue;
        }
        for contact in report.contacts.iter() {
            debug!(
                "{:?} touched {:?} {:?} on its {:?} side",
                entity, contact.kind, contact.other, contact.side
            );
        }
        if let Some(ended) = outcome.apply_contacts(report.contacts.iter().map(|c| (c.kind, c.side)))
        {
            commands.trigger(MissionEndedEvent {
                outcome: ended,
                player: entity,
            });
        }
    }
}
