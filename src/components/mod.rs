//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`animation`] – per-direction sprite-sheet walk cycle
//! - [`boxcollider`] – axis-aligned box collider centred on the entity
//! - [`collision`] – entity kinds and per-step collision flags
//! - [`inputcontrolled`] – keyboard mapping and per-frame movement intent
//! - [`mapposition`] – world-space position of the entity centre
//! - [`rigidbody`] – velocity and named acceleration forces
//! - [`sprite`] – textured quad, optionally a sprite-sheet cell

pub mod animation;
pub mod boxcollider;
pub mod collision;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
