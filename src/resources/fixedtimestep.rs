//! Fixed-timestep accumulator.
//!
//! Variable frame deltas go in, a whole number of constant physics steps
//! comes out. Whatever is left over stays in the accumulator for the next
//! frame, so `steps * step + accumulator` always equals the total time fed in.

use bevy_ecs::prelude::Resource;

/// Physics rate of the lander, just under 60 Hz.
pub const DEFAULT_FIXED_TIMESTEP: f32 = 0.0166666;

#[derive(Resource, Debug, Clone, Copy)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    total_steps: u64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(DEFAULT_FIXED_TIMESTEP)
    }
}

impl FixedTimestep {
    /// Non-positive or non-finite steps fall back to [`DEFAULT_FIXED_TIMESTEP`].
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            DEFAULT_FIXED_TIMESTEP
        };
        Self {
            step,
            accumulator: 0.0,
            total_steps: 0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over to the next frame, always in `[0, step)`.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Feed one frame's wall-clock delta and return how many physics steps
    /// are due. Negative deltas are ignored.
    pub fn accumulate(&mut self, frame_delta: f32) -> u32 {
        let mut delta_time = self.accumulator + frame_delta.max(0.0);
        let mut steps = 0;
        while delta_time >= self.step {
            delta_time -= self.step;
            steps += 1;
        }
        self.accumulator = delta_time;
        self.total_steps += u64::from(steps);
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let fixed = FixedTimestep::default();
        assert_eq!(fixed.accumulator(), 0.0);
        assert_eq!(fixed.total_steps(), 0);
        assert_eq!(fixed.step(), DEFAULT_FIXED_TIMESTEP);
    }

    #[test]
    fn short_frames_accumulate_without_stepping() {
        let mut fixed = FixedTimestep::new(0.01);
        assert_eq!(fixed.accumulate(0.004), 0);
        assert_eq!(fixed.accumulate(0.004), 0);
        assert_eq!(fixed.accumulate(0.004), 1);
        assert!((fixed.accumulator() - 0.002).abs() < 1e-6);
    }

    #[test]
    fn long_frame_runs_several_steps() {
        let mut fixed = FixedTimestep::new(0.01);
        assert_eq!(fixed.accumulate(0.0455), 4);
        assert!((fixed.accumulator() - 0.0055).abs() < 1e-6);
        assert_eq!(fixed.total_steps(), 4);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut fixed = FixedTimestep::new(0.01);
        fixed.accumulate(0.005);
        assert_eq!(fixed.accumulate(-1.0), 0);
        assert!((fixed.accumulator() - 0.005).abs() < 1e-7);
    }

    #[test]
    fn invalid_step_uses_default() {
        assert_eq!(FixedTimestep::new(0.0).step(), DEFAULT_FIXED_TIMESTEP);
        assert_eq!(FixedTimestep::new(f32::NAN).step(), DEFAULT_FIXED_TIMESTEP);
    }

    #[test]
    fn time_is_conserved() {
        let mut fixed = FixedTimestep::default();
        let deltas = [0.016, 0.033, 0.001, 0.1, 0.0166666, 0.25, 0.007, 0.02];
        let mut fed = 0.0f64;
        for round in 0..50 {
            let dt = deltas[round % deltas.len()];
            fed += f64::from(dt);
            fixed.accumulate(dt);
            assert!(fixed.accumulator() < fixed.step());
            assert!(fixed.accumulator() >= 0.0);
        }
        let consumed =
            fixed.total_steps() as f64 * f64::from(fixed.step()) + f64::from(fixed.accumulator());
        assert!((consumed - fed).abs() < 1e-3, "consumed {consumed}, fed {fed}");
    }
}
