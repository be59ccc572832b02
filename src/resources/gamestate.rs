//! High-level game state resource.
//!
//! Holds the running flag of the main loop. Input (quit key, window close)
//! moves it to [`GameStates::Quitting`]; the loop exits when it sees that.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Playing,
    Quitting,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }

    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }

    pub fn is_running(&self) -> bool {
        self.current != GameStates::Quitting
    }

    pub fn request_quit(&mut self) {
        self.current = GameStates::Quitting;
    }
}
