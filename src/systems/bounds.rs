//! Keep the player inside the playable area.
use bevy_ecs::prelude::*;

use crate::components::collision::EntityKind;
use crate::components::mapposition::MapPosition;
use crate::resources::bounds::WorldBounds;

/// Clamp every player position to [`WorldBounds`], one axis at a time.
pub fn clamp_to_world_bounds(
    bounds: Res<WorldBounds>,
    mut query: Query<(&EntityKind, &mut MapPosition)>,
) {
    for (kind, mut position) in query.iter_mut() {
        if *kind == EntityKind::Player && !bounds.contains(position.pos) {
            position.pos = bounds.clamp(position.pos);
        }
    }
}
