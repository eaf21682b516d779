//! Gravity Slingshot, the game itself.
//!
//! Aim by dragging, launch probes from the camera's side of the system,
//! and let the gravity field carry them into the two targets. All
//! rendering and UI live outside; this module consumes input events and
//! emits game events plus the per-frame world snapshot.

use glam::{Vec2, Vec3};

use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::GameEvent;
use crate::input::queue::{InputEvent, InputQueue};
use crate::sim::launch::{compute_launch, LaunchParams};

/// Custom input event kinds from the UI layer.
pub mod input_events {
    /// a = power setting.
    pub const SET_POWER: u32 = 1;
    /// Launch a probe with the committed aim and power.
    pub const LAUNCH: u32 = 2;
    /// Full game reset.
    pub const RESET: u32 = 3;
    /// Toggle the follow-camera flag.
    pub const TOGGLE_TRACK: u32 = 4;
    /// a, b, c = camera world position.
    pub const CAMERA: u32 = 5;
}

/// Game event kinds to the UI layer.
pub mod game_events {
    /// a = targets hit, b = probes used, c = power.
    pub const HUD: f32 = 1.0;
    /// a = tracking enabled (0/1), b = active probe count.
    pub const TRACKING: f32 = 2.0;
    /// a, b, c = tracked probe position. Sent only while tracking.
    pub const TRACKED_POS: f32 = 3.0;
    /// a = target id, b = total targets hit.
    pub const TARGET_HIT: f32 = 4.0;
    /// One-shot: both targets hit. a = probes used.
    pub const WIN: f32 = 5.0;
}

pub const POWER_MIN: f32 = 10.0;
pub const POWER_MAX: f32 = 100.0;
/// Hits required to win.
const TARGET_GOAL: u32 = 2;
/// Camera position assumed until the renderer reports one.
const DEFAULT_CAMERA: Vec3 = Vec3::new(0.0, 30.0, 60.0);

pub struct SlingshotGame {
    targets_hit: u32,
    probes_used: u32,
    power: f32,
    is_aiming: bool,
    aim_start: Vec2,
    aim_end: Vec2,
    track_probe: bool,
    camera: Vec3,
    win_announced: bool,
}

impl SlingshotGame {
    pub fn new() -> Self {
        Self {
            targets_hit: 0,
            probes_used: 0,
            power: POWER_MAX,
            is_aiming: false,
            aim_start: Vec2::ZERO,
            aim_end: Vec2::ZERO,
            track_probe: false,
            camera: DEFAULT_CAMERA,
            win_announced: false,
        }
    }

    pub fn targets_hit(&self) -> u32 {
        self.targets_hit
    }

    pub fn probes_used(&self) -> u32 {
        self.probes_used
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn is_aiming(&self) -> bool {
        self.is_aiming
    }

    pub fn track_probe(&self) -> bool {
        self.track_probe
    }

    fn handle_event(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.is_aiming = true;
                self.aim_start = Vec2::new(*x, *y);
                self.aim_end = self.aim_start;
            }
            InputEvent::PointerMove { x, y } => {
                if self.is_aiming {
                    self.aim_end = Vec2::new(*x, *y);
                }
            }
            InputEvent::PointerUp { .. } => {
                self.is_aiming = false;
            }
            InputEvent::Custom { kind, a, b, c } => match *kind {
                input_events::SET_POWER => {
                    self.power = a.clamp(POWER_MIN, POWER_MAX);
                }
                input_events::LAUNCH => self.launch_probe(ctx),
                input_events::RESET => self.reset(ctx),
                input_events::TOGGLE_TRACK => {
                    self.track_probe = !self.track_probe;
                }
                input_events::CAMERA => {
                    self.camera = Vec3::new(*a, *b, *c);
                }
                _ => {}
            },
        }
    }

    fn launch_probe(&mut self, ctx: &mut EngineContext) {
        // Mid-gesture launches are a no-op, not an error.
        if self.is_aiming {
            return;
        }

        let params = LaunchParams {
            camera: self.camera,
            aim_delta: self.aim_end - self.aim_start,
            power: self.power,
        };
        let launch = compute_launch(&params, &mut ctx.rng);
        let id = ctx.world.launch(launch.position, launch.velocity);
        self.probes_used += 1;
        log::info!(
            "probe {:?} away: pos {:?}, vel {:?}",
            id,
            launch.position,
            launch.velocity
        );
    }

    fn reset(&mut self, ctx: &mut EngineContext) {
        ctx.world.clear_probes();
        ctx.world.reset_targets();
        self.targets_hit = 0;
        self.probes_used = 0;
        self.track_probe = false;
        self.is_aiming = false;
        self.aim_start = Vec2::ZERO;
        self.aim_end = Vec2::ZERO;
        self.win_announced = false;
        // Orbits keep running: planet phases survive a reset.
        log::info!("game reset");
    }

    fn score_hits(&mut self, ctx: &mut EngineContext) {
        for target_id in ctx.world.check_target_hits() {
            self.targets_hit += 1;
            log::info!("target {} hit ({} total)", target_id, self.targets_hit);
            ctx.emit_event(GameEvent {
                kind: game_events::TARGET_HIT,
                a: target_id as f32,
                b: self.targets_hit as f32,
                c: 0.0,
            });
        }

        if self.targets_hit >= TARGET_GOAL && !self.win_announced {
            self.win_announced = true;
            log::info!("both targets hit in {} probes", self.probes_used);
            ctx.emit_event(GameEvent {
                kind: game_events::WIN,
                a: self.probes_used as f32,
                b: 0.0,
                c: 0.0,
            });
        }
    }

    fn emit_frame_events(&self, ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent {
            kind: game_events::HUD,
            a: self.targets_hit as f32,
            b: self.probes_used as f32,
            c: self.power,
        });

        let active = ctx.world.probes().iter().filter(|p| p.active).count();
        ctx.emit_event(GameEvent {
            kind: game_events::TRACKING,
            a: if self.track_probe { 1.0 } else { 0.0 },
            b: active as f32,
            c: 0.0,
        });

        if self.track_probe {
            if let Some(probe) = ctx.world.tracked_probe() {
                let pos = probe.position;
                ctx.emit_event(GameEvent {
                    kind: game_events::TRACKED_POS,
                    a: pos.x,
                    b: pos.y,
                    c: pos.z,
                });
            }
        }
    }
}

impl Default for SlingshotGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SlingshotGame {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.world.seed_system(&mut ctx.rng);
        log::info!(
            "world seeded: {} planets, {} targets",
            ctx.world.bodies().len(),
            ctx.world.targets().len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_event(ctx, event);
        }

        let dt = self.config().fixed_dt;
        ctx.world.advance_orbits();
        ctx.world.step_probes(dt);
        self.score_hits(ctx);
        let lost = ctx.world.retire_escaped();
        if lost > 0 {
            log::debug!("{} probe(s) left the system", lost);
        }

        self.emit_frame_events(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::world::ESCAPE_RADIUS;

    fn game_and_ctx() -> (SlingshotGame, EngineContext) {
        let mut game = SlingshotGame::new();
        let mut ctx = EngineContext::with_seed(42);
        game.init(&mut ctx);
        (game, ctx)
    }

    fn tick(game: &mut SlingshotGame, ctx: &mut EngineContext, events: Vec<InputEvent>) {
        let mut input = InputQueue::new();
        for e in events {
            input.push(e);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input);
    }

    fn custom(kind: u32, a: f32, b: f32, c: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c }
    }

    #[test]
    fn launch_spawns_probe_and_counts() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(&mut game, &mut ctx, vec![custom(input_events::LAUNCH, 0.0, 0.0, 0.0)]);
        assert_eq!(game.probes_used(), 1);
        assert_eq!(ctx.world.probes().len(), 1);
        let speed = ctx.world.probes()[0].velocity.length();
        // Power defaults to max; the probe has integrated one tick, so the
        // speed has drifted slightly from the muzzle value.
        assert!((speed - POWER_MAX * 0.02).abs() < 0.1);
    }

    #[test]
    fn launch_while_aiming_is_ignored() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(
            &mut game,
            &mut ctx,
            vec![
                InputEvent::PointerDown { x: 100.0, y: 100.0 },
                custom(input_events::LAUNCH, 0.0, 0.0, 0.0),
            ],
        );
        assert!(game.is_aiming());
        assert_eq!(game.probes_used(), 0);
        assert!(ctx.world.probes().is_empty());
    }

    #[test]
    fn committed_gesture_biases_next_launch() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(
            &mut game,
            &mut ctx,
            vec![
                InputEvent::PointerDown { x: 0.0, y: 0.0 },
                InputEvent::PointerMove { x: 250.0, y: 0.0 },
                InputEvent::PointerUp { x: 250.0, y: 0.0 },
                custom(input_events::LAUNCH, 0.0, 0.0, 0.0),
            ],
        );
        assert_eq!(game.probes_used(), 1);
        assert!(!game.is_aiming());
    }

    #[test]
    fn power_clamps_at_input_boundary() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(&mut game, &mut ctx, vec![custom(input_events::SET_POWER, 300.0, 0.0, 0.0)]);
        assert_eq!(game.power(), POWER_MAX);
        tick(&mut game, &mut ctx, vec![custom(input_events::SET_POWER, -4.0, 0.0, 0.0)]);
        assert_eq!(game.power(), POWER_MIN);
        tick(&mut game, &mut ctx, vec![custom(input_events::SET_POWER, 55.0, 0.0, 0.0)]);
        assert_eq!(game.power(), 55.0);
    }

    #[test]
    fn win_event_fires_exactly_once() {
        let (mut game, mut ctx) = game_and_ctx();

        // Park a probe on each target by hand.
        let first = ctx.world.targets()[0].position;
        let second = ctx.world.targets()[1].position;
        ctx.world.launch(first, glam::Vec3::ZERO);
        ctx.world.launch(second, glam::Vec3::ZERO);

        // Probes drift under gravity after scoring, so count win events
        // over several frames rather than asserting state once.
        let mut wins = 0;
        for _ in 0..5 {
            tick(&mut game, &mut ctx, vec![]);
            wins += ctx
                .events
                .iter()
                .filter(|e| e.kind == game_events::WIN)
                .count();
        }
        assert_eq!(game.targets_hit(), 2);
        assert_eq!(wins, 1);
    }

    #[test]
    fn reset_restores_round_but_not_orbits() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(&mut game, &mut ctx, vec![custom(input_events::LAUNCH, 0.0, 0.0, 0.0)]);
        tick(&mut game, &mut ctx, vec![custom(input_events::TOGGLE_TRACK, 0.0, 0.0, 0.0)]);
        assert!(game.track_probe());

        let phases: Vec<f32> = ctx.world.bodies().iter().map(|b| b.angular_phase).collect();
        tick(&mut game, &mut ctx, vec![custom(input_events::RESET, 0.0, 0.0, 0.0)]);

        assert_eq!(game.targets_hit(), 0);
        assert_eq!(game.probes_used(), 0);
        assert!(!game.track_probe());
        assert!(ctx.world.probes().is_empty());
        assert!(ctx.world.targets().iter().all(|t| !t.hit));

        // One tick ran after the reset, so each phase advanced exactly one
        // step beyond its snapshot; none snapped back to a fresh seed.
        for (before, body) in phases.iter().zip(ctx.world.bodies()) {
            let expected = (before + body.angular_speed).rem_euclid(std::f32::consts::TAU);
            assert!((body.angular_phase - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn tracking_events_follow_first_active_probe() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(
            &mut game,
            &mut ctx,
            vec![
                custom(input_events::TOGGLE_TRACK, 0.0, 0.0, 0.0),
                custom(input_events::LAUNCH, 0.0, 0.0, 0.0),
            ],
        );
        let tracked = ctx
            .events
            .iter()
            .find(|e| e.kind == game_events::TRACKED_POS)
            .expect("tracking event");
        let probe = &ctx.world.probes()[0];
        assert_eq!(
            (tracked.a, tracked.b, tracked.c),
            (probe.position.x, probe.position.y, probe.position.z)
        );
    }

    #[test]
    fn hud_event_reports_counters_every_frame() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(&mut game, &mut ctx, vec![]);
        let hud = ctx
            .events
            .iter()
            .find(|e| e.kind == game_events::HUD)
            .expect("hud event");
        assert_eq!((hud.a, hud.b, hud.c), (0.0, 0.0, POWER_MAX));
    }

    #[test]
    fn camera_report_moves_launch_point() {
        let (mut game, mut ctx) = game_and_ctx();
        tick(
            &mut game,
            &mut ctx,
            vec![
                custom(input_events::CAMERA, 80.0, 0.0, 0.0),
                custom(input_events::LAUNCH, 0.0, 0.0, 0.0),
            ],
        );
        let probe = &ctx.world.probes()[0];
        // Camera due +x puts the launch point near (80, 0, 0), jitter aside.
        assert!(probe.position.x > 70.0);
        assert!(probe.position.y.abs() < 1.0);
    }

    #[test]
    fn escaped_probes_disappear_from_pool() {
        let (mut game, mut ctx) = game_and_ctx();
        ctx.world.launch(
            glam::Vec3::new(ESCAPE_RADIUS - 0.01, 0.0, 0.0),
            glam::Vec3::new(60.0, 0.0, 0.0),
        );
        tick(&mut game, &mut ctx, vec![]);
        assert!(ctx.world.probes().is_empty());
    }
}
