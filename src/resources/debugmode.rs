//! Debug toggle resource.
//!
//! The mere presence of this resource enables collider overlays and the
//! per-frame diagnostics line. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws collider outlines.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
