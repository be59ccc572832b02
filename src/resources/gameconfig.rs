//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 480
//! target_fps = 60
//!
//! [physics]
//! fixed_timestep = 0.0166666
//! gravity = -0.2
//! drift = 0.2
//!
//! [player]
//! speed = 1.0
//! jump_power = 0.5
//!
//! [world]
//! half_width = 4.8
//! half_height = 3.35
//!
//! [level]
//! random_trap = false
//! seed = 0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::bounds::{DEFAULT_BOUNDS_HALF_HEIGHT, DEFAULT_BOUNDS_HALF_WIDTH};
use crate::resources::fixedtimestep::DEFAULT_FIXED_TIMESTEP;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_GRAVITY: f32 = -0.2;
const DEFAULT_DRIFT: f32 = 0.2;
const DEFAULT_PLAYER_SPEED: f32 = 1.0;
const DEFAULT_JUMP_POWER: f32 = 0.5;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Physics step in seconds.
    pub fixed_timestep: f32,
    /// Vertical acceleration applied to the player every step.
    pub gravity: f32,
    /// Horizontal acceleration applied to the player every step.
    pub drift: f32,
    pub player_speed: f32,
    pub jump_power: f32,
    pub bounds_half_width: f32,
    pub bounds_half_height: f32,
    /// Turn one randomly chosen platform into a trap at setup.
    pub random_trap: bool,
    pub seed: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            gravity: DEFAULT_GRAVITY,
            drift: DEFAULT_DRIFT,
            player_speed: DEFAULT_PLAYER_SPEED,
            jump_power: DEFAULT_JUMP_POWER,
            bounds_half_width: DEFAULT_BOUNDS_HALF_WIDTH,
            bounds_half_height: DEFAULT_BOUNDS_HALF_HEIGHT,
            random_trap: false,
            seed: 0,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
                .filter(|v| v.is_finite())
        };

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(step) = float("physics", "fixed_timestep").filter(|s| *s > 0.0) {
            self.fixed_timestep = step;
        }
        if let Some(gravity) = float("physics", "gravity") {
            self.gravity = gravity;
        }
        if let Some(drift) = float("physics", "drift") {
            self.drift = drift;
        }

        // [player] section
        if let Some(speed) = float("player", "speed") {
            self.player_speed = speed;
        }
        if let Some(power) = float("player", "jump_power") {
            self.jump_power = power;
        }

        // [world] section
        if let Some(w) = float("world", "half_width") {
            self.bounds_half_width = w.abs();
        }
        if let Some(h) = float("world", "half_height") {
            self.bounds_half_height = h.abs();
        }

        // [level] section
        if let Some(random_trap) = config.getbool("level", "random_trap").ok().flatten() {
            self.random_trap = random_trap;
        }
        if let Some(seed) = config.getuint("level", "seed").ok().flatten() {
            self.seed = seed;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, step={}, gravity={}, drift={}, speed={}, jump={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fixed_timestep,
            self.gravity,
            self.drift,
            self.player_speed,
            self.jump_power
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("physics", "fixed_timestep", Some(self.fixed_timestep.to_string()));
        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set("physics", "drift", Some(self.drift.to_string()));

        config.set("player", "speed", Some(self.player_speed.to_string()));
        config.set("player", "jump_power", Some(self.jump_power.to_string()));

        config.set("world", "half_width", Some(self.bounds_half_width.to_string()));
        config.set("world", "half_height", Some(self.bounds_half_height.to_string()));

        config.set("level", "random_trap", Some(self.random_trap.to_string()));
        config.set("level", "seed", Some(self.seed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
