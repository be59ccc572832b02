use bevy_ecs::prelude::Resource;
use glam::Vec2;

pub const DEFAULT_BOUNDS_HALF_WIDTH: f32 = 4.80;
pub const DEFAULT_BOUNDS_HALF_HEIGHT: f32 = 3.35;

/// Playable area, centred on the origin. The player is clamped inside it
/// after every physics step.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub half_extents: Vec2,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDS_HALF_WIDTH, DEFAULT_BOUNDS_HALF_HEIGHT)
    }
}

impl WorldBounds {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_extents: Vec2::new(half_width.abs(), half_height.abs()),
        }
    }

    /// Clamp each axis independently.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.clamp(-self.half_extents, self.half_extents)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        self.clamp(position) == position
    }
}
