pub mod runner;

pub use runner::LevelRunner;

/// Generate all `#[wasm_bindgen]` exports for a level.
///
/// Generates:
/// - `thread_local!` storage for the LevelRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (sim_init, sim_tick, movement commands, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use hopper_engine::*;
///
/// mod level;
/// use level::MyLevel;
///
/// hopper_web::export_level!(MyLevel, "my-level");
/// ```
///
/// # Arguments
///
/// - `$level_type`: The level struct type that implements `hopper_engine::Level`
///   and has a `new()` constructor
/// - `$level_name`: A string literal used in the initialization log message
///
/// Calls made before `sim_init()` are logged and ignored; accessors return
/// zero values.
#[macro_export]
macro_rules! export_level {
    ($level_type:ty, $level_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::LevelRunner<$level_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::LevelRunner<$level_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: not initialized, call sim_init() first", $level_name);
                    R::default()
                }
            })
        }

        fn parse_command(name: &str) -> Option<MoveCommand> {
            match name.parse::<MoveCommand>() {
                Ok(command) => Some(command),
                Err(e) => {
                    log::warn!("{}: {}", $level_name, e);
                    None
                }
            }
        }

        #[wasm_bindgen]
        pub fn sim_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let level = <$level_type>::new();
            let runner = $crate::LevelRunner::new(level);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $level_name);
        }

        #[wasm_bindgen]
        pub fn sim_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        /// Start a movement command: `left`, `right`, `up`, `down` or `jump`.
        #[wasm_bindgen]
        pub fn sim_move(name: &str) {
            if let Some(command) = parse_command(name) {
                with_runner(|r| r.push_input(InputEvent::Move(command)));
            }
        }

        /// Stop a movement command previously started with `sim_move`.
        #[wasm_bindgen]
        pub fn sim_stop_move(name: &str) {
            if let Some(command) = parse_command(name) {
                with_runner(|r| r.push_input(InputEvent::StopMove(command)));
            }
        }

        #[wasm_bindgen]
        pub fn sim_load_config(json: &str) {
            with_runner(|r| r.load_config(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_buffer_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.buffer_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_snapshots_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.snapshots_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_snapshot_count() -> u32 {
            with_runner(|r| r.snapshot_count())
        }

        #[wasm_bindgen]
        pub fn get_frame_count() -> f64 {
            with_runner(|r| r.frames())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_snapshots() -> u32 {
            with_runner(|r| r.max_snapshots())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
