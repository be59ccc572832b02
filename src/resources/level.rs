//! Declarative level layout.
//!
//! A level is a list of platform records plus the player spawn point, read
//! from JSON. The built-in lunar level ships inside the binary; `--level`
//! points at a replacement file.
//!
//! ```json
//! {
//!   "player_spawn": [-3.5, 2.35],
//!   "platforms": [
//!     { "position": [0.0, 0.0], "width": 0.4, "kind": "platform", "texture": "rock" },
//!     { "position": [3.5, 2.25], "width": 0.4, "height": 1.0, "kind": "trap", "texture": "key" }
//!   ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::collision::EntityKind;

const BUILTIN_LEVEL: &str = include_str!("../../assets/levels/lunar.json");

fn default_extent() -> f32 {
    1.0
}

/// Kinds a level file may place. The player is never part of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Platform,
    Trap,
}

impl From<PlatformKind> for EntityKind {
    fn from(kind: PlatformKind) -> Self {
        match kind {
            PlatformKind::Platform => EntityKind::Platform,
            PlatformKind::Trap => EntityKind::Trap,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub position: Vec2,
    #[serde(default = "default_extent")]
    pub width: f32,
    #[serde(default = "default_extent")]
    pub height: f32,
    pub kind: PlatformKind,
    pub texture: String,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub player_spawn: Vec2,
    pub platforms: Vec<PlatformSpec>,
}

impl LevelLayout {
    /// The lunar landing level.
    pub fn builtin() -> Result<Self, String> {
        Self::from_json(BUILTIN_LEVEL)
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let layout: LevelLayout =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse level: {}", e))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {}: {}", path.display(), e))?;
        Self::from_json(&text)
    }

    fn validate(&self) -> Result<(), String> {
        if !self.player_spawn.is_finite() {
            return Err("Level player_spawn must be finite".to_string());
        }
        for (index, platform) in self.platforms.iter().enumerate() {
            if !platform.position.is_finite() {
                return Err(format!("Platform {} has a non-finite position", index));
            }
            if !(platform.width > 0.0 && platform.height > 0.0) {
                return Err(format!(
                    "Platform {} must have a positive size, got {}x{}",
                    index, platform.width, platform.height
                ));
            }
        }
        Ok(())
    }

    /// Turn one randomly chosen regular platform into a trap. Returns its
    /// index, or `None` when there is no regular platform left.
    pub fn place_random_trap(&mut self, rng: &mut fastrand::Rng) -> Option<usize> {
        let candidates: Vec<usize> = self
            .platforms
            .iter()
            .enumerate()
            .filter(|(_, p)| p.kind == PlatformKind::Platform)
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let index = candidates[rng.usize(..candidates.len())];
        self.platforms[index].kind = PlatformKind::Trap;
        Some(index)
    }

    pub fn count(&self, kind: PlatformKind) -> usize {
        self.platforms.iter().filter(|p| p.kind == kind).count()
    }
}
