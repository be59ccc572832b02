//! Mission outcome resource.
//!
//! A run is `Ongoing` until the player either touches a trap (`Failed`) or
//! lands on a platform (`Succeeded`). Only `Ongoing` can transition, so at
//! most one terminal outcome is ever reached per run; [`MissionOutcome::reset`]
//! starts a new run.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::collision::{ContactSide, EntityKind};

/// Banner glyph size in world units.
pub const BANNER_GLYPH_SIZE: f32 = 0.43;
/// The banner blinks with this period, in rendered frames.
pub const BANNER_BLINK_PERIOD: u64 = 55;
/// Frames per period during which the banner is shown.
pub const BANNER_VISIBLE_FRAMES: u64 = 16;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissionOutcome {
    #[default]
    Ongoing,
    Failed,
    Succeeded,
}

impl MissionOutcome {
    pub fn is_terminal(self) -> bool {
        self != MissionOutcome::Ongoing
    }

    /// Decide the outcome of one physics step from its contacts. A trap
    /// contact wins over a landing in the same step. Returns the new outcome
    /// when this call ended the mission.
    pub fn apply_contacts(
        &mut self,
        contacts: impl IntoIterator<Item = (EntityKind, ContactSide)>,
    ) -> Option<MissionOutcome> {
        if self.is_terminal() {
            return None;
        }
        let mut landed = false;
        for (kind, side) in contacts {
            match (kind, side) {
                (EntityKind::Trap, _) => {
                    *self = MissionOutcome::Failed;
                    return Some(*self);
                }
                (EntityKind::Platform, ContactSide::Bottom) => landed = true,
                _ => {}
            }
        }
        if landed {
            *self = MissionOutcome::Succeeded;
            return Some(*self);
        }
        None
    }

    pub fn reset(&mut self) {
        *self = MissionOutcome::Ongoing;
    }

    /// Message and left-glyph anchor of the end-of-mission banner.
    pub fn banner(self) -> Option<(&'static str, Vec2)> {
        match self {
            MissionOutcome::Ongoing => None,
            MissionOutcome::Failed => Some(("MISSION FAILED", Vec2::new(-2.75, 0.75))),
            MissionOutcome::Succeeded => Some(("MISSION ACCOMPLISHED", Vec2::new(-4.0, 0.75))),
        }
    }
}

/// Whether the blinking banner is drawn on rendered frame `frame_count`.
pub fn banner_visible(frame_count: u64) -> bool {
    frame_count % BANNER_BLINK_PERIOD < BANNER_VISIBLE_FRAMES
}
