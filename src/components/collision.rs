//! Collision classification and per-step contact flags.

use bevy_ecs::prelude::*;

/// What role an entity plays in collision resolution.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Platform,
    Trap,
}

impl EntityKind {
    /// Only platforms and traps block movement.
    pub fn is_collidable(self) -> bool {
        matches!(self, EntityKind::Platform | EntityKind::Trap)
    }
}

/// Side of the moving body that was struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which sides of the body touched something during the most recent physics
/// step. Cleared at the start of every step; never cumulative.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, side: ContactSide) {
        match side {
            ContactSide::Top => self.top = true,
            ContactSide::Bottom => self.bottom = true,
            ContactSide::Left => self.left = true,
            ContactSide::Right => self.right = true,
        }
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}
