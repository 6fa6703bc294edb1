/// Fixed timestep accumulator.
/// Turns variable host frame times into a whole number of fixed animation steps.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time not yet consumed by a step.
    accumulator: f32,
    /// Upper bound on steps produced by a single frame.
    max_steps: u32,
}

impl FixedTimestep {
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Add host frame time and return how many fixed steps are due.
    /// Time beyond `max_steps` worth of steps is dropped so a long stall
    /// (window drag, breakpoint) cannot fast-forward the animation.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let cap = self.dt * self.max_steps as f32;
        self.accumulator = (self.accumulator + frame_dt.max(0.0)).min(cap);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_per_exact_frame() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        for _ in 0..120 {
            assert_eq!(ts.accumulate(1.0 / 60.0), 1);
        }
    }

    #[test]
    fn short_frames_carry_over() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), FixedTimestep::DEFAULT_MAX_STEPS);
        assert_eq!(ts.accumulate(0.0), 0);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }
}
