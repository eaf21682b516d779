/// Fixed timestep accumulator.
///
/// The browser delivers variable frame deltas; the simulation advances in
/// fixed ticks. Leftover time carries into the next frame.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
}

/// Upper bound on ticks consumed per frame. A long GC pause or a
/// backgrounded tab would otherwise queue hundreds of catch-up steps.
const MAX_STEPS_PER_FRAME: f32 = 10.0;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's delta; returns how many fixed ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}
