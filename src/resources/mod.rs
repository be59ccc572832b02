//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration,
//! the level layout and the mission outcome.
//!
//! Overview
//! - `bitmapfont` – 16×16 glyph atlas and text layout
//! - `bounds` – playable area the player is clamped to
//! - `camera2d` – orthographic world→screen mapping
//! - `debugmode` – presence toggles collider overlays
//! - `fixedtimestep` – accumulator draining frame time into physics steps
//! - `gameconfig` – INI-backed settings
//! - `gamestate` – the running flag of the main loop
//! - `input` – per-frame keyboard snapshot
//! - `level` – declarative platform layout and player spawn
//! - `mission` – ongoing / failed / succeeded outcome of the run
//! - `texturestore` – loaded textures keyed by string IDs (`render` feature)
//! - `worldtime` – wall-clock frame timing
pub mod bitmapfont;
pub mod bounds;
pub mod camera2d;
pub mod debugmode;
pub mod fixedtimestep;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod mission;
#[cfg(feature = "render")]
pub mod texturestore;
pub mod worldtime;
