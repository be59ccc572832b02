//! George lunar lander entry point.
//!
//! A small 2D game built on:
//! - **raylib** for windowing, textures and keyboard input
//! - **bevy_ecs** for the entity-component-system simulation
//!
//! George starts at the top left of the screen and drifts under gravity and
//! a constant sideways push. Landing on a platform accomplishes the mission;
//! touching the trap fails it.
//!
//! # Main Loop
//!
//! 1. Load the configuration (`config.ini`) and the level layout
//! 2. Open the window and load every texture (fatal on failure)
//! 3. Build the world, spawn the level and register observers
//! 4. Each frame:
//!    - poll the keyboard and map it to movement intent
//!    - run as many fixed physics steps as the frame time allows
//!    - draw the world and the blinking mission banner
//!
//! # Controls
//!
//! Arrow keys move, Space jumps when standing on something, R restarts,
//! F11 toggles debug overlays and Q quits.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features render -- --random-trap
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::RaylibHandle;

use lunarlander::game::{self, FONT_TEXTURE, PLAYER_TEXTURE};
use lunarlander::resources::gameconfig::GameConfig;
use lunarlander::resources::gamestate::GameState;
use lunarlander::resources::level::LevelLayout;
use lunarlander::resources::texturestore::TextureStore;
use lunarlander::resources::worldtime::WorldTime;
use lunarlander::systems::input::update_input_state;
use lunarlander::systems::inputcontroller::input_mapper;
use lunarlander::systems::render::render_frame;
use lunarlander::systems::time::{run_fixed_steps, update_world_time};

const TEXTURES: [(&str, &str); 4] = [
    (PLAYER_TEXTURE, "./assets/textures/spaceman.png"),
    ("rock", "./assets/textures/LayeredRock.png"),
    ("key", "./assets/textures/key.png"),
    (FONT_TEXTURE, "./assets/textures/font1.png"),
];

/// George the lunar lander
#[derive(Parser)]
#[command(version, about = "Land George on a platform without touching the trap.")]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level layout (JSON) to play instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Turn one random platform into a trap.
    #[arg(long)]
    random_trap: bool,

    /// Seed for the random trap (0 picks one at random).
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if cli.random_trap {
        config.random_trap = true;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let layout = match &cli.level {
        Some(path) => LevelLayout::load(path),
        None => LevelLayout::builtin(),
    };
    let layout = match layout {
        Ok(layout) => layout,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Hello, George!")
        .build();
    rl.set_target_fps(config.target_fps);
    // Q quits, not ESC
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    for (key, path) in TEXTURES {
        if let Err(e) = textures.load(&mut rl, &thread, key, path) {
            error!("{}", e);
            std::process::exit(1);
        }
    }
    info!("Loaded {} textures", textures.len());

    // --------------- ECS world + resources ---------------
    let mut world = game::init_world(config, layout);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut frame = game::build_frame_schedule();
    frame.add_systems(update_input_state.before(input_mapper));
    let mut fixed = game::build_fixed_schedule();
    let mut draw = Schedule::default();
    draw.add_systems(render_frame);

    // --------------- Main loop ---------------
    while world.resource::<GameState>().is_running() {
        let dt = world.non_send_resource::<RaylibHandle>().get_frame_time();
        update_world_time(&mut world, dt);
        let scaled_dt = world.resource::<WorldTime>().delta;

        frame.run(&mut world);
        run_fixed_steps(&mut world, &mut fixed, scaled_dt);
        draw.run(&mut world);

        world.clear_trackers();
    }

    // Textures must be unloaded before the window closes
    drop(world.remove_non_send_resource::<TextureStore>());
    info!("Goodbye, George");
}
