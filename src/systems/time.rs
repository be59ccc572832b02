//! Time update systems.
//!
//! - [`update_world_time`] advances the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) once per rendered
//!   frame.
//! - [`run_fixed_steps`] drains the frame time into the
//!   [`FixedTimestep`](crate::resources::fixedtimestep::FixedTimestep)
//!   accumulator and runs the fixed schedule once per whole step.
use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale`, writes both `elapsed` and `delta` and
/// counts the frame.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Feed `dt` to the accumulator and run `fixed` once per whole step.
///
/// Returns the number of steps run. Every step sees the same
/// `FixedTimestep::step()` regardless of the frame rate; the remainder stays
/// in the accumulator for the next frame.
pub fn run_fixed_steps(world: &mut World, fixed: &mut Schedule, dt: f32) -> u32 {
    let steps = world.resource_mut::<FixedTimestep>().accumulate(dt);
    for _ in 0..steps {
        fixed.run(world);
    }
    if steps > 1 {
        trace!("Frame of {:.4}s ran {} physics steps", dt, steps);
    }
    steps
}
