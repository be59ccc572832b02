//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance walk cycles and update the sprite frame
//! - [`bounds`] – clamp the player to the playable area
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`] (`render` feature)
//! - [`inputcontroller`] – translate input state into movement intent, thrust and jumps
//! - [`physics`] – integrate bodies and resolve collisions against platforms and traps
//! - [`render`] – draw sprites, the mission banner and debug overlays using Raylib (`render` feature)
//! - [`time`] – update frame time and drive the fixed-step schedule

pub mod animation;
pub mod bounds;
#[cfg(feature = "render")]
pub mod input;
pub mod inputcontroller;
pub mod physics;
#[cfg(feature = "render")]
pub mod render;
pub mod time;
