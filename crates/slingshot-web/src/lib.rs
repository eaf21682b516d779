pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates the `thread_local!` storage for the GameRunner, a
/// `with_runner()` helper, and every wasm-bindgen export (init, tick,
/// input pushers, buffer accessors), so the game crate is one line.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use slingshot_core::*;
///
/// slingshot_web::export_game!(SlingshotGame, "gravity-slingshot");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `slingshot_core::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow
                    .as_mut()
                    .expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_targets_ptr() -> *const f32 {
            with_runner(|r| r.targets_ptr())
        }

        #[wasm_bindgen]
        pub fn get_target_count() -> u32 {
            with_runner(|r| r.target_count())
        }

        #[wasm_bindgen]
        pub fn get_probes_ptr() -> *const f32 {
            with_runner(|r| r.probes_ptr())
        }

        #[wasm_bindgen]
        pub fn get_probe_count() -> u32 {
            with_runner(|r| r.probe_count())
        }

        #[wasm_bindgen]
        pub fn get_trail_ptr() -> *const f32 {
            with_runner(|r| r.trail_ptr())
        }

        #[wasm_bindgen]
        pub fn get_trail_vertex_count() -> u32 {
            with_runner(|r| r.trail_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_probes() -> u32 {
            with_runner(|r| r.max_probes())
        }

        #[wasm_bindgen]
        pub fn get_trail_limit() -> u32 {
            with_runner(|r| r.trail_limit())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        #[wasm_bindgen]
        pub fn get_fixed_dt() -> f32 {
            with_runner(|r| r.fixed_dt())
        }
    };
}

use wasm_bindgen::prelude::*;

use slingshot_core::{InputEvent, SlingshotGame};

export_game!(SlingshotGame, "gravity-slingshot");
