pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// This macro eliminates the per-game boilerplate by generating:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, manifest load, frame tick, input
///   handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use helio_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// helio_web::export_game!(MyGame, "my-game");
/// ```
///
/// The expansion requires `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook` in the game crate's dependencies.
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `helio_engine::Game`
/// - `$game_name`: A string literal used in log messages
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
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
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

            log::info!("{}: runner created, waiting for manifest", $game_name);
        }

        /// Load the asset manifest JSON and build the scene against it.
        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| match r.load_manifest(json) {
                Ok(()) => log::info!("{}: initialized", $game_name),
                Err(err) => log::error!("{}: init failed: {}", $game_name, err),
            });
        }

        /// Per-frame entry point; `time_ms` is the rAF timestamp.
        #[wasm_bindgen]
        pub fn game_frame(time_ms: f64) {
            with_runner(|r| r.frame(time_ms));
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
        pub fn game_wheel(delta: f32) {
            with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_sphere_instances_ptr() -> *const f32 {
            with_runner(|r| r.sphere_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_instance_count() -> u32 {
            with_runner(|r| r.sphere_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_lit_split() -> u32 {
            with_runner(|r| r.lit_split())
        }

        #[wasm_bindgen]
        pub fn get_ring_instances_ptr() -> *const f32 {
            with_runner(|r| r.ring_instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ring_instance_count() -> u32 {
            with_runner(|r| r.ring_instance_count())
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_rings() -> u32 {
            with_runner(|r| r.max_rings())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
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
        pub fn get_sphere_segments() -> u32 {
            with_runner(|r| r.sphere_segments())
        }
    };
}
