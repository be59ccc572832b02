//! Game setup and schedule wiring.
//!
//! - [`init_world`] builds a headless [`World`] with every resource and
//!   observer the simulation needs, then spawns the level.
//! - [`build_frame_schedule`] holds the once-per-frame systems.
//! - [`build_fixed_schedule`] holds the systems run once per physics step,
//!   in order: physics, bounds clamp, walk animation.
//!
//! The binary adds keyboard polling and drawing on top of these; tests drive
//! them directly.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::WalkAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{CollisionFlags, EntityKind};
use crate::components::inputcontrolled::{InputControlled, Movement};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::mission::{mission_ended_observer, reset_level_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::bitmapfont::BitmapFont;
use crate::resources::bounds::WorldBounds;
use crate::resources::camera2d::OrthoCamera;
use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::level::LevelLayout;
use crate::resources::mission::MissionOutcome;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::walk_animation;
use crate::systems::bounds::clamp_to_world_bounds;
use crate::systems::inputcontroller::input_mapper;
use crate::systems::physics::physics_step;

/// Player box and sprite size in world units.
pub const PLAYER_SIZE: f32 = 0.9;
/// The player sheet is 4×4: one row per direction (up, down, right, left).
pub const PLAYER_SHEET_COLUMNS: u32 = 4;
pub const PLAYER_SHEET_ROWS: u32 = 4;

pub const PLAYER_TEXTURE: &str = "george";
pub const FONT_TEXTURE: &str = "font";

/// Spawn every platform of the [`LevelLayout`] and the player on its spawn
/// point.
pub fn setup(mut commands: Commands, layout: Res<LevelLayout>, config: Res<GameConfig>) {
    for platform in &layout.platforms {
        commands.spawn((
            EntityKind::from(platform.kind),
            MapPosition {
                pos: platform.position,
            },
            BoxCollider::new(platform.width, platform.height),
            Sprite::new(platform.texture.clone(), platform.width, platform.height),
        ));
    }

    let player = commands
        .spawn((
            EntityKind::Player,
            MapPosition {
                pos: layout.player_spawn,
            },
            RigidBody::with_base_forces(config.gravity, config.drift),
            BoxCollider::new(PLAYER_SIZE, PLAYER_SIZE),
            CollisionFlags::default(),
            Movement::new(config.player_speed, config.jump_power),
            InputControlled::default(),
            Sprite::new(PLAYER_TEXTURE, PLAYER_SIZE, PLAYER_SIZE)
                .with_sheet(PLAYER_SHEET_COLUMNS, PLAYER_SHEET_ROWS),
            WalkAnimation::from_sheet_rows(PLAYER_SHEET_COLUMNS as usize),
        ))
        .id();

    info!(
        "Level spawned: {} platforms, player {:?} at {:?}",
        layout.platforms.len(),
        player,
        layout.player_spawn
    );
}

/// Build a world ready to simulate `layout` with `config`.
///
/// When `config.random_trap` is set, one regular platform is turned into a
/// trap first. A seed of 0 picks a fresh random seed.
pub fn init_world(config: GameConfig, mut layout: LevelLayout) -> World {
    if config.random_trap {
        let mut rng = if config.seed == 0 {
            fastrand::Rng::new()
        } else {
            fastrand::Rng::with_seed(config.seed)
        };
        match layout.place_random_trap(&mut rng) {
            Some(index) => info!("Platform {} is now a trap", index),
            None => info!("No platform left to turn into a trap"),
        }
    }

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FixedTimestep::new(config.fixed_timestep));
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(MissionOutcome::default());
    world.insert_resource(WorldBounds::new(
        config.bounds_half_width,
        config.bounds_half_height,
    ));
    world.insert_resource(OrthoCamera::default());
    world.insert_resource(BitmapFont::new(FONT_TEXTURE));
    world.insert_resource(layout);
    world.insert_resource(config);

    world.spawn(Observer::new(mission_ended_observer));
    world.spawn(Observer::new(reset_level_observer));
    world.spawn(Observer::new(switch_debug_observer));
    // Observers must exist before any system triggers an event.
    world.flush();

    let mut startup = Schedule::default();
    startup.add_systems(setup);
    startup.run(&mut world);

    world
}

/// Systems run once per rendered frame, before the physics steps.
pub fn build_frame_schedule() -> Schedule {
    let mut frame = Schedule::default();
    frame.add_systems(input_mapper);
    frame
}

/// Systems run once per fixed physics step.
pub fn build_fixed_schedule() -> Schedule {
    let mut fixed = Schedule::default();
    fixed.add_systems((physics_step, clamp_to_world_bounds, walk_animation).chain());
    fixed
}
