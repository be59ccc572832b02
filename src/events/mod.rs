//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`mission`] – end-of-mission notification and level reset
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod mission;
pub mod switchdebug;
