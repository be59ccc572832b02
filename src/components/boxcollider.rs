use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Overlaps no deeper than this count as touching, not penetrating. A body
/// just snapped tangent on one axis is not resolved again on the other, and
/// a gap this small still counts as contact while moving into the box.
pub const CONTACT_SLOP: f32 = 1e-5;

/// Axis-aligned box centred on the entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
}

impl Default for BoxCollider {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size.abs() * 0.5
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let half = self.half_extents();
        (position - half, position + half)
    }

    /// Signed overlap on each axis against another collider: positive when
    /// the projections overlap, negative for the gap between them.
    pub fn depth(&self, position: Vec2, other: &Self, other_position: Vec2) -> Vec2 {
        let reach = self.half_extents() + other.half_extents();
        reach - (position - other_position).abs()
    }
}
