//! Simulation integration tests: fixed-step physics, collision outcomes,
//! world bounds, input mapping and level reset on a headless world.

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use glam::Vec2;

use lunarlander::components::collision::{CollisionFlags, EntityKind};
use lunarlander::components::inputcontrolled::{InputControlled, Movement};
use lunarlander::components::mapposition::MapPosition;
use lunarlander::components::rigidbody::RigidBody;
use lunarlander::components::sprite::Sprite;
use lunarlander::events::mission::MissionEndedEvent;
use lunarlander::game::{build_fixed_schedule, build_frame_schedule, init_world};
use lunarlander::resources::debugmode::DebugMode;
use lunarlander::resources::fixedtimestep::FixedTimestep;
use lunarlander::resources::gameconfig::GameConfig;
use lunarlander::resources::gamestate::GameState;
use lunarlander::resources::input::InputState;
use lunarlander::resources::level::{LevelLayout, PlatformKind, PlatformSpec};
use lunarlander::resources::mission::MissionOutcome;
use lunarlander::systems::time::run_fixed_steps;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn block(x: f32, y: f32, kind: PlatformKind) -> PlatformSpec {
    PlatformSpec {
        position: Vec2::new(x, y),
        width: 0.4,
        height: 1.0,
        kind,
        texture: "rock".to_string(),
    }
}

fn config(gravity: f32, drift: f32) -> GameConfig {
    let mut config = GameConfig::new();
    config.gravity = gravity;
    config.drift = drift;
    config
}

fn make_world(config: GameConfig, spawn: Vec2, platforms: Vec<PlatformSpec>) -> World {
    init_world(
        config,
        LevelLayout {
            player_spawn: spawn,
            platforms,
        },
    )
}

fn player(world: &mut World) -> Entity {
    let mut query = world.query::<(Entity, &EntityKind)>();
    query
        .iter(world)
        .find(|(_, kind)| **kind == EntityKind::Player)
        .map(|(entity, _)| entity)
        .expect("player spawned")
}

fn position(world: &mut World) -> Vec2 {
    let entity = player(world);
    world.get::<MapPosition>(entity).unwrap().pos
}

fn flags(world: &mut World) -> CollisionFlags {
    let entity = player(world);
    *world.get::<CollisionFlags>(entity).unwrap()
}

fn run_steps(world: &mut World, steps: usize) {
    let mut fixed = build_fixed_schedule();
    for _ in 0..steps {
        fixed.run(world);
    }
}

fn run_frame(world: &mut World) {
    let mut frame = build_frame_schedule();
    frame.run(world);
}

#[derive(Resource, Default)]
struct EndedEvents(Vec<MissionOutcome>);

fn record_ended(trigger: On<MissionEndedEvent>, mut ended: ResMut<EndedEvents>) {
    ended.0.push(trigger.event().outcome);
}

fn watch_mission(world: &mut World) {
    world.insert_resource(EndedEvents::default());
    world.spawn(Observer::new(record_ended));
    world.flush();
}

// ==================== Level setup ====================

#[test]
fn builtin_level_spawns_platforms_and_player() {
    let mut world = init_world(GameConfig::new(), LevelLayout::builtin().unwrap());
    let mut query = world.query::<&EntityKind>();
    let kinds: Vec<EntityKind> = query.iter(&world).copied().collect();
    assert_eq!(kinds.iter().filter(|k| **k == EntityKind::Platform).count(), 7);
    assert_eq!(kinds.iter().filter(|k| **k == EntityKind::Trap).count(), 1);
    assert_eq!(kinds.iter().filter(|k| **k == EntityKind::Player).count(), 1);
    assert_eq!(position(&mut world), Vec2::new(-3.5, 2.35));
    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Ongoing);
}

#[test]
fn random_trap_is_placed_at_setup() {
    let mut config = GameConfig::new();
    config.random_trap = true;
    config.seed = 9;
    let mut world = init_world(config, LevelLayout::builtin().unwrap());
    let mut query = world.query::<&EntityKind>();
    let traps = query
        .iter(&world)
        .filter(|k| **k == EntityKind::Trap)
        .count();
    assert_eq!(traps, 2);
}

#[test]
fn player_sprite_uses_the_sheet() {
    let mut world = init_world(GameConfig::new(), LevelLayout::builtin().unwrap());
    let entity = player(&mut world);
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!((sprite.columns, sprite.rows), (4, 4));
    assert_eq!(sprite.size, Vec2::new(0.9, 0.9));
}

// ==================== Physics and outcome ====================

#[test]
fn resting_player_stays_on_platform_and_lands() {
    // Bottom edge exactly on the platform top
    let mut world = make_world(
        config(-0.2, 0.0),
        Vec2::new(0.0, 0.95),
        vec![block(0.0, 0.0, PlatformKind::Platform)],
    );
    watch_mission(&mut world);

    for _ in 0..30 {
        run_steps(&mut world, 1);
        let f = flags(&mut world);
        assert!(f.bottom);
        assert!(!f.top && !f.left && !f.right);
        assert!(approx_eq(position(&mut world).y, 0.95));
    }
    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Succeeded);
    assert_eq!(world.resource::<EndedEvents>().0, vec![MissionOutcome::Succeeded]);
}

#[test]
fn falling_onto_platform_snaps_to_its_top() {
    let mut world = make_world(
        config(-0.2, 0.0),
        Vec2::new(0.0, 1.2),
        vec![block(0.0, 0.0, PlatformKind::Platform)],
    );
    let entity = player(&mut world);
    world.get_mut::<RigidBody>(entity).unwrap().velocity.y = -2.0;

    run_steps(&mut world, 20);
    assert!(flags(&mut world).bottom);
    assert!(approx_eq(position(&mut world).y, 0.95));
    assert_eq!(world.get::<RigidBody>(entity).unwrap().velocity.y, 0.0);
}

#[test]
fn touching_a_trap_fails_and_stays_failed() {
    let mut world = make_world(
        config(-0.2, 0.0),
        Vec2::new(0.0, 0.95),
        vec![
            block(0.0, 0.0, PlatformKind::Trap),
            block(3.0, 0.0, PlatformKind::Platform),
        ],
    );
    watch_mission(&mut world);

    run_steps(&mut world, 1);
    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Failed);

    // Landing afterwards does not overwrite the outcome
    let entity = player(&mut world);
    world.get_mut::<MapPosition>(entity).unwrap().pos = Vec2::new(3.0, 0.95);
    run_steps(&mut world, 5);
    assert!(flags(&mut world).bottom);
    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Failed);
    assert_eq!(world.resource::<EndedEvents>().0, vec![MissionOutcome::Failed]);
}

#[test]
fn side_contact_is_not_a_landing() {
    let mut world = make_world(
        config(0.0, 0.0),
        Vec2::new(-0.651, 0.0),
        vec![block(0.0, 0.0, PlatformKind::Platform)],
    );
    let entity = player(&mut world);
    world.get_mut::<RigidBody>(entity).unwrap().velocity.x = 1.0;

    run_steps(&mut world, 1);
    let f = flags(&mut world);
    assert!(f.right);
    assert!(!f.bottom);
    assert!(approx_eq(position(&mut world).x, -0.65));
    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Ongoing);
}

#[test]
fn drift_pushes_the_player_sideways() {
    let mut world = make_world(config(0.0, 0.2), Vec2::ZERO, Vec::new());
    run_steps(&mut world, 60);
    let pos = position(&mut world);
    assert!(pos.x > 0.0);
    assert_eq!(pos.y, 0.0);
}

// ==================== World bounds ====================

#[test]
fn player_is_clamped_to_world_bounds() {
    let cases = [
        (Vec2::new(6.0, 0.0), Vec2::new(4.80, 0.0)),
        (Vec2::new(-6.0, 0.0), Vec2::new(-4.80, 0.0)),
        (Vec2::new(0.0, 5.0), Vec2::new(0.0, 3.35)),
        (Vec2::new(0.0, -5.0), Vec2::new(0.0, -3.35)),
        (Vec2::new(-9.0, 9.0), Vec2::new(-4.80, 3.35)),
    ];
    for (spawn, expected) in cases {
        let mut world = make_world(config(0.0, 0.0), spawn, Vec::new());
        run_steps(&mut world, 1);
        assert_eq!(position(&mut world), expected, "spawned at {spawn:?}");
    }
}

// ==================== Fixed timestep ====================

#[test]
fn fixed_steps_conserve_time() {
    let mut world = make_world(config(-0.2, 0.2), Vec2::ZERO, Vec::new());
    let mut fixed = build_fixed_schedule();
    let frames = [0.016, 0.05, 0.001, 0.2, 0.0, 0.033];
    let mut ran = 0;
    for dt in frames {
        ran += run_fixed_steps(&mut world, &mut fixed, dt);
    }
    let timestep = world.resource::<FixedTimestep>();
    let total: f32 = frames.iter().sum();
    assert_eq!(u64::from(ran), timestep.total_steps());
    assert!(approx_eq(
        ran as f32 * timestep.step() + timestep.accumulator(),
        total
    ));
    assert!(timestep.accumulator() < timestep.step());
}

#[test]
fn long_frame_matches_many_short_frames() {
    let spawn = Vec2::new(-1.0, 2.0);
    let mut coarse = make_world(config(-0.2, 0.2), spawn, Vec::new());
    let mut fine = make_world(config(-0.2, 0.2), spawn, Vec::new());
    let step = coarse.resource::<FixedTimestep>().step();

    let mut fixed = build_fixed_schedule();
    assert_eq!(run_fixed_steps(&mut coarse, &mut fixed, step * 4.0 + 1e-6), 4);
    let mut fixed = build_fixed_schedule();
    for _ in 0..4 {
        assert_eq!(run_fixed_steps(&mut fine, &mut fixed, step), 1);
    }
    assert_eq!(position(&mut coarse), position(&mut fine));
}

#[test]
fn short_frame_runs_no_step() {
    let mut world = make_world(config(-0.2, 0.0), Vec2::ZERO, Vec::new());
    let mut fixed = build_fixed_schedule();
    assert_eq!(run_fixed_steps(&mut world, &mut fixed, 0.005), 0);
    assert_eq!(position(&mut world), Vec2::ZERO);
}

// ==================== Input mapping ====================

#[test]
fn diagonal_input_is_clamped_to_unit_length() {
    let mut world = make_world(config(0.0, 0.0), Vec2::ZERO, Vec::new());
    let entity = player(&mut world);
    world
        .entity_mut(entity)
        .insert(InputControlled::symmetric(1.0, 1.0));
    {
        let mut input = world.resource_mut::<InputState>();
        input.up.press();
        input.right.press();
    }
    run_frame(&mut world);

    let direction = world.get::<Movement>(entity).unwrap().direction;
    assert!(approx_eq(direction.length(), 1.0));
    assert!(approx_eq(direction.x, direction.y));
}

#[test]
fn movement_intent_is_rebuilt_every_frame() {
    let mut world = make_world(config(0.0, 0.0), Vec2::ZERO, Vec::new());
    let entity = player(&mut world);
    world.resource_mut::<InputState>().left.press();
    run_frame(&mut world);
    assert_eq!(
        world.get::<Movement>(entity).unwrap().direction,
        Vec2::new(-0.5, 0.0)
    );

    world.resource_mut::<InputState>().clear();
    run_frame(&mut world);
    assert_eq!(world.get::<Movement>(entity).unwrap().direction, Vec2::ZERO);
}

#[test]
fn jump_needs_ground_contact() {
    let mut world = make_world(
        config(-0.2, 0.0),
        Vec2::new(0.0, 2.0),
        vec![block(0.0, 0.0, PlatformKind::Platform)],
    );
    let entity = player(&mut world);

    // Airborne: ignored
    world.resource_mut::<InputState>().jump.press();
    run_frame(&mut world);
    assert!(!world.get::<Movement>(entity).unwrap().jump_requested);

    // Grounded: accepted and consumed by the next step
    world.get_mut::<MapPosition>(entity).unwrap().pos = Vec2::new(0.0, 0.95);
    run_steps(&mut world, 1);
    assert!(flags(&mut world).bottom);
    {
        let mut input = world.resource_mut::<InputState>();
        input.clear();
        input.jump.press();
    }
    run_frame(&mut world);
    assert!(world.get::<Movement>(entity).unwrap().jump_requested);

    run_steps(&mut world, 1);
    assert!(!world.get::<Movement>(entity).unwrap().jump_requested);
    assert!(world.get::<RigidBody>(entity).unwrap().velocity.y > 0.4);
    assert!(position(&mut world).y > 0.95);
}

#[test]
fn grounded_jump_is_accepted_after_any_step_with_small_timestep_and_gravity() {
    let mut cfg = config(-0.03, 0.0);
    cfg.fixed_timestep = 0.005;
    let mut world = make_world(
        cfg,
        Vec2::new(0.0, 0.95),
        vec![block(0.0, 0.0, PlatformKind::Platform)],
    );
    let entity = player(&mut world);
    assert_eq!(world.resource::<FixedTimestep>().step(), 0.005);

    for step in 0..7 {
        run_steps(&mut world, 1);
        assert!(flags(&mut world).bottom, "step {step}");
        assert!(approx_eq(position(&mut world).y, 0.95));
    }

    world.resource_mut::<InputState>().jump.press();
    run_frame(&mut world);
    assert!(world.get::<Movement>(entity).unwrap().jump_requested);

    run_steps(&mut world, 1);
    assert!(world.get::<RigidBody>(entity).unwrap().velocity.y > 0.4);
}

#[test]
fn walking_advances_the_animation() {
    let mut world = make_world(config(0.0, 0.0), Vec2::ZERO, Vec::new());
    let entity = player(&mut world);
    world.resource_mut::<InputState>().right.press();
    run_frame(&mut world);

    run_steps(&mut world, 1);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 8);
    run_steps(&mut world, 19);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 9);

    world.resource_mut::<InputState>().clear();
    run_frame(&mut world);
    run_steps(&mut world, 1);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 8);
}

#[test]
fn quit_key_and_window_close_stop_the_game() {
    let mut world = make_world(config(0.0, 0.0), Vec2::ZERO, Vec::new());
    run_frame(&mut world);
    assert!(world.resource::<GameState>().is_running());
    world.resource_mut::<InputState>().quit.press();
    run_frame(&mut world);
    assert!(!world.resource::<GameState>().is_running());

    let mut world = make_world(config(0.0, 0.0), Vec2::ZERO, Vec::new());
    world.resource_mut::<InputState>().close_requested = true;
    run_frame(&mut world);
    assert!(!world.resource::<GameState>().is_running());
}

// ==================== Events ====================

#[test]
fn reset_restores_spawn_and_clears_outcome() {
    let spawn = Vec2::new(0.0, 0.95);
    let mut world = make_world(
        config(-0.2, 0.0),
        spawn,
        vec![block(0.0, 0.0, PlatformKind::Trap)],
    );
    let entity = player(&mut world);
    world.get_mut::<RigidBody>(entity).unwrap().velocity.x = 2.0;
    run_steps(&mut world, 10);
    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Failed);
    assert_ne!(position(&mut world), spawn);

    world.resource_mut::<InputState>().reset.press();
    run_frame(&mut world);

    assert_eq!(*world.resource::<MissionOutcome>(), MissionOutcome::Ongoing);
    assert_eq!(position(&mut world), spawn);
    assert_eq!(world.get::<RigidBody>(entity).unwrap().velocity, Vec2::ZERO);
    assert!(!flags(&mut world).any());
    assert_eq!(world.resource::<FixedTimestep>().accumulator(), 0.0);
}

#[test]
fn debug_key_toggles_debug_mode() {
    let mut world = make_world(config(0.0, 0.0), Vec2::ZERO, Vec::new());
    world.resource_mut::<InputState>().debug.press();
    run_frame(&mut world);
    assert!(world.contains_resource::<DebugMode>());

    // Held key does not toggle again
    world.resource_mut::<InputState>().debug.update(true);
    run_frame(&mut world);
    assert!(world.contains_resource::<DebugMode>());

    {
        let mut input = world.resource_mut::<InputState>();
        input.clear();
        input.debug.press();
    }
    run_frame(&mut world);
    assert!(!world.contains_resource::<DebugMode>());
}
