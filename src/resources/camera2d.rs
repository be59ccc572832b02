//! Orthographic world camera.
//!
//! The world is y-up and centred on the origin; the view spans
//! `[-half_extents.x, half_extents.x] × [-half_extents.y, half_extents.y]`.
//! Screens are y-down with the origin in the top-left corner.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

pub const DEFAULT_VIEW_HALF_WIDTH: f32 = 5.0;
pub const DEFAULT_VIEW_HALF_HEIGHT: f32 = 3.75;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    pub half_extents: Vec2,
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(DEFAULT_VIEW_HALF_WIDTH, DEFAULT_VIEW_HALF_HEIGHT),
        }
    }
}

impl OrthoCamera {
    /// Screen pixels per world unit on each axis.
    pub fn scale(&self, screen: Vec2) -> Vec2 {
        screen / (self.half_extents * 2.0)
    }

    pub fn world_to_screen(&self, world: Vec2, screen: Vec2) -> Vec2 {
        let scale = self.scale(screen);
        Vec2::new(
            (world.x + self.half_extents.x) * scale.x,
            (self.half_extents.y - world.y) * scale.y,
        )
    }

    /// World-space size converted to pixels.
    pub fn size_to_screen(&self, size: Vec2, screen: Vec2) -> Vec2 {
        size * self.scale(screen)
    }
}
