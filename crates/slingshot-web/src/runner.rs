use slingshot_core::{
    build_frame, EngineContext, FixedTimestep, FrameBuffer, Game, GameConfig, InputEvent,
    InputQueue, ProtocolLayout,
};

/// Generic game runner that wires up the core loop.
///
/// The concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    frame: FrameBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let frame = FrameBuffer::with_capacity(config.max_probes);
        let ctx = EngineContext::with_seed(config.rng_seed);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            frame,
            timestep,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: advance 0..n fixed ticks, then rebuild the snapshot.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain only once a tick has seen the queue; events landing on a
        // zero-step frame wait for the next one.
        if steps > 0 {
            self.input.drain();
        }

        build_frame(&self.ctx.world, &mut self.frame);
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.frame.bodies_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.frame.body_count()
    }

    pub fn targets_ptr(&self) -> *const f32 {
        self.frame.targets_ptr()
    }

    pub fn target_count(&self) -> u32 {
        self.frame.target_count()
    }

    pub fn probes_ptr(&self) -> *const f32 {
        self.frame.probes_ptr()
    }

    pub fn probe_count(&self) -> u32 {
        self.frame.probe_count()
    }

    pub fn trail_ptr(&self) -> *const f32 {
        self.frame.trail_ptr()
    }

    pub fn trail_vertex_count(&self) -> u32 {
        self.frame.trail_vertex_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript at startup) ----

    pub fn max_probes(&self) -> u32 {
        self.layout.max_probes as u32
    }

    pub fn trail_limit(&self) -> u32 {
        self.layout.trail_limit as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slingshot_core::game::input_events;
    use slingshot_core::SlingshotGame;

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = GameRunner::new(SlingshotGame::new());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.body_count(), 0);
    }

    #[test]
    fn init_and_tick_populate_the_frame() {
        let mut runner = GameRunner::new(SlingshotGame::new());
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.body_count(), 9);
        assert_eq!(runner.target_count(), 2);
        assert!(runner.event_count() >= 2); // HUD + tracking, at least
    }

    #[test]
    fn queued_launch_lands_in_the_pool() {
        let mut runner = GameRunner::new(SlingshotGame::new());
        runner.init();
        runner.push_input(InputEvent::Custom {
            kind: input_events::LAUNCH,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.probe_count(), 1);
        assert_eq!(runner.trail_vertex_count(), 1);
    }

    #[test]
    fn sub_frame_delta_runs_no_step() {
        let mut runner = GameRunner::new(SlingshotGame::new());
        runner.init();
        runner.tick(0.004);
        // No fixed step ran, so no events were emitted this frame.
        assert_eq!(runner.event_count(), 0);
    }

    #[test]
    fn input_on_a_zero_step_frame_is_not_lost() {
        let mut runner = GameRunner::new(SlingshotGame::new());
        runner.init();
        runner.push_input(InputEvent::Custom {
            kind: input_events::LAUNCH,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(0.004); // too short for a tick
        assert_eq!(runner.probe_count(), 0);
        runner.tick(1.0 / 60.0); // the queued launch applies here
        assert_eq!(runner.probe_count(), 1);
    }
}
