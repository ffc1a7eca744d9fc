//! `#[wasm_bindgen]` export surface.
//!
//! One thread-local [`ViewRunner`] plus free functions, since
//! wasm-bindgen cannot export structs that hold browser handles. The
//! host page calls `view_init` once, feeds the data file to
//! `view_load_data`, then drives everything through the rest.

pub mod painter;
pub mod runner;
pub mod schedule;
pub mod theme;

pub use painter::CanvasPainter;
pub use runner::ViewRunner;
pub use schedule::FrameLoop;

use std::cell::RefCell;

use solarview_core::{InputEvent, ViewMode};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ViewRunner>> = RefCell::new(None);
    static LOOP: RefCell<Option<FrameLoop>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ViewRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("View not initialized. Call view_init() first.");
        f(runner)
    })
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

#[wasm_bindgen]
pub fn view_init(canvas_id: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    let runner = ViewRunner::new(canvas_id, now_ms(), seed);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("solarview: initialized on #{canvas_id}");
}

#[wasm_bindgen]
pub fn view_load_data(json: &str) {
    with_runner(|r| r.load_data(json));
}

/// Start the animation loop. A second call while running is a no-op.
#[wasm_bindgen]
pub fn view_start() {
    LOOP.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = FrameLoop::start(|now| with_runner(|r| r.tick(now)));
        }
    });
}

/// Cancel the animation loop. The pending callback is dropped.
#[wasm_bindgen]
pub fn view_stop() {
    LOOP.with(|cell| {
        cell.borrow_mut().take();
    });
}

/// Run a single frame by hand. Useful with the loop stopped.
#[wasm_bindgen]
pub fn view_tick() {
    with_runner(|r| r.tick(now_ms()));
}

#[wasm_bindgen]
pub fn view_click(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn view_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(now_ms(), width, height));
}

#[wasm_bindgen]
pub fn view_set_speed(factor: f64) {
    with_runner(|r| r.push_input(InputEvent::SetSpeed { factor }));
}

#[wasm_bindgen]
pub fn view_set_show_orbits(on: bool) {
    with_runner(|r| r.push_input(InputEvent::SetShowOrbits { on }));
}

/// Switch sections by name; starts or stops the loop to match.
#[wasm_bindgen]
pub fn view_set_mode(name: &str) {
    let Some(mode) = ViewMode::from_name(name) else {
        log::warn!("unknown view mode: {name}");
        return;
    };
    let animate = with_runner(|r| r.set_mode(mode, now_ms()));
    if animate {
        view_start();
    } else {
        view_stop();
    }
}

#[wasm_bindgen]
pub fn view_reset() {
    with_runner(|r| r.push_input(InputEvent::Reset));
}

/// Current selection: -1 none, 0 the sun, otherwise the body id.
#[wasm_bindgen]
pub fn view_selected() -> i32 {
    with_runner(|r| r.selected_code())
}

/// Apply the saved theme. Returns the active theme name.
#[wasm_bindgen]
pub fn theme_init() -> String {
    theme::init().name().to_string()
}

/// Flip the theme. Returns the new theme name.
#[wasm_bindgen]
pub fn theme_toggle() -> String {
    theme::toggle().name().to_string()
}
