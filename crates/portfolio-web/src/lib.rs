pub mod runner;

pub use runner::PageRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PageRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut PageRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Page not initialized. Call page_init() first.");
        f(runner)
    })
}

/// Initialize logging and the page session. Call once on DOMContentLoaded.
#[wasm_bindgen]
pub fn page_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(PageRunner::new(seed));
    });

    log::info!("portfolio page: initialized");
}

/// Feed one requestAnimationFrame delta, in seconds.
#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn page_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Theme ----

/// Toggle light/dark mode; returns the new label for the toggle button.
#[wasm_bindgen]
pub fn theme_toggle() -> String {
    with_runner(|r| r.theme_toggle().to_owned())
}

/// Whether the body should carry the `dark-mode` class.
#[wasm_bindgen]
pub fn theme_is_dark() -> bool {
    with_runner(|r| r.theme_is_dark())
}

// ---- Scroll reveal ----

/// Report an IntersectionObserver ratio for a section. Returns `true` when
/// the section should get its `active` class (once per section); the shell
/// then unobserves it.
#[wasm_bindgen]
pub fn reveal_intersect(key: &str, ratio: f32) -> bool {
    with_runner(|r| r.reveal_intersect(key, ratio))
}

// ---- Guessing game ----

/// Evaluate one guess; returns the message for the result area.
#[wasm_bindgen]
pub fn guess_submit(input: &str) -> String {
    with_runner(|r| r.guess_submit(input).message())
}

// ---- Plinko ----

/// Launch a ball. Returns `false` (no-op) while one is already in flight.
#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_launch() -> bool {
    with_runner(|r| r.plinko_launch())
}

/// The queued landing report as JSON, at most once per landing. The score
/// and ball slot are already updated by the time this returns anything.
#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_take_landing() -> Option<String> {
    with_runner(|r| {
        r.plinko_take_landing().map(|landing| {
            serde_json::json!({
                "basket": landing.basket,
                "multiplier": landing.multiplier,
                "points": landing.points,
                "score": landing.score,
                "message": landing.message(),
            })
            .to_string()
        })
    })
}

#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_score() -> u32 {
    with_runner(|r| r.plinko_score())
}

#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_ball_active() -> bool {
    with_runner(|r| r.plinko_ball_active())
}

#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_ball_x() -> f32 {
    with_runner(|r| r.plinko_ball_position().0)
}

#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_ball_y() -> f32 {
    with_runner(|r| r.plinko_ball_position().1)
}

/// Static board geometry and basket multipliers as JSON, for the canvas
/// renderer and the basket labels. Fixed for the session.
#[cfg(feature = "physics")]
#[wasm_bindgen]
pub fn plinko_layout_json() -> String {
    with_runner(|r| r.plinko_layout_json())
}

// ---- Carousel ----

#[wasm_bindgen]
pub fn carousel_current() -> String {
    with_runner(|r| serde_json::to_string(r.carousel_current()).unwrap_or_default())
}

#[wasm_bindgen]
pub fn carousel_next() -> String {
    with_runner(|r| serde_json::to_string(r.carousel_next()).unwrap_or_default())
}

#[wasm_bindgen]
pub fn carousel_prev() -> String {
    with_runner(|r| serde_json::to_string(r.carousel_prev()).unwrap_or_default())
}

// ---- Contact form ----

/// Validate a submission payload. Returns a JSON report: either a
/// confirmation message or the per-field errors to display.
#[wasm_bindgen]
pub fn contact_submit(json: &str) -> String {
    with_runner(|r| serde_json::to_string(&r.contact_submit(json)).unwrap_or_default())
}
