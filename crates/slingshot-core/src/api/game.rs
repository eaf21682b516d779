use crate::api::types::GameEvent;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::sim::world::World;

/// Configuration for the core, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum probes exported per frame snapshot. The simulation pool is
    /// unbounded; this caps only what the renderer sees.
    pub max_probes: usize,
    /// Maximum game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the injected PRNG (launch jitter, initial orbit phases).
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_probes: 64,
            max_events: 32,
            rng_seed: 42,
        }
    }
}

/// The contract the game fulfills toward the runner.
pub trait Game {
    /// Return core configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state: populate the world, seed whatever needs seeding.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed tick: apply input, advance the simulation, emit events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable engine state passed to `Game::init` and `Game::update`.
pub struct EngineContext {
    pub world: World,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(GameConfig::default().rng_seed)
    }

    /// Create a context whose PRNG starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            world: World::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
        }
    }

    /// Emit a game event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_display_rate() {
        let config = GameConfig::default();
        assert!((config.fixed_dt - 1.0 / 60.0).abs() < 1e-9);
        assert!(config.max_probes > 0);
        assert!(config.max_events > 0);
    }

    #[test]
    fn events_clear_between_frames() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent {
            kind: 1.0,
            a: 2.0,
            b: 3.0,
            c: 4.0,
        });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn seeded_contexts_share_rng_streams() {
        let mut a = EngineContext::with_seed(9);
        let mut b = EngineContext::with_seed(9);
        assert_eq!(a.rng.next_int(1000), b.rng.next_int(1000));
    }
}
