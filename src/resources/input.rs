//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes it
//! to systems via the [`InputState`] resource. The snapshot is written by the
//! windowing layer (see `systems::input`, `render` feature) or directly by
//! tests, and read by the input mapper.
use bevy_ecs::prelude::*;

/// Boolean key state for one logical action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolState {
    /// Whether the key is currently held down this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
}

impl BoolState {
    /// Update from this frame's raw key state.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.active = down;
    }

    /// Held and freshly pressed this frame.
    pub fn press(&mut self) {
        self.update(true);
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub jump: BoolState,
    pub quit: BoolState,
    pub reset: BoolState,
    pub debug: BoolState,
    /// The window asked to close this frame.
    pub close_requested: bool,
}

impl InputState {
    /// Release every key and forget pending window requests.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
