use portfolio_core::{ContactInput, ContactReport, GuessOutcome, PageSession, Product};

#[cfg(feature = "physics")]
use portfolio_core::Landing;

/// Owns the page session and adapts it for the wasm exports.
///
/// The exports in `lib.rs` are free functions (wasm-bindgen cannot export
/// generic or borrowed state directly), so the runner lives in a
/// `thread_local!` cell and every export goes through `with_runner`.
pub struct PageRunner {
    session: PageSession,
}

impl PageRunner {
    pub fn new(seed: u64) -> Self {
        Self {
            session: PageSession::new(seed),
        }
    }

    /// Feed one animation-frame delta (seconds) into the simulation.
    #[cfg(feature = "physics")]
    pub fn tick(&mut self, dt: f32) {
        self.session.tick(dt);
    }

    // ---- Theme ----

    pub fn theme_toggle(&mut self) -> &'static str {
        self.session.theme.toggle();
        self.session.theme.button_label()
    }

    pub fn theme_is_dark(&self) -> bool {
        self.session.theme.is_dark()
    }

    // ---- Scroll reveal ----

    pub fn reveal_intersect(&mut self, key: &str, ratio: f32) -> bool {
        self.session.reveal.report(key, ratio)
    }

    // ---- Guessing game ----

    pub fn guess_submit(&mut self, input: &str) -> GuessOutcome {
        self.session.guess.guess(input)
    }

    // ---- Plinko ----

    #[cfg(feature = "physics")]
    pub fn plinko_launch(&mut self) -> bool {
        self.session.plinko.launch()
    }

    #[cfg(feature = "physics")]
    pub fn plinko_take_landing(&mut self) -> Option<Landing> {
        self.session.plinko.take_landing()
    }

    #[cfg(feature = "physics")]
    pub fn plinko_score(&self) -> u32 {
        self.session.plinko.score()
    }

    #[cfg(feature = "physics")]
    pub fn plinko_ball_active(&self) -> bool {
        self.session.plinko.ball_active()
    }

    #[cfg(feature = "physics")]
    pub fn plinko_ball_position(&self) -> (f32, f32) {
        self.session
            .plinko
            .ball_position()
            .map(|p| (p.x, p.y))
            .unwrap_or((0.0, 0.0))
    }

    #[cfg(feature = "physics")]
    pub fn plinko_layout_json(&self) -> String {
        serde_json::to_string(&self.session.plinko.board().layout()).unwrap_or_default()
    }

    // ---- Carousel ----

    pub fn carousel_current(&self) -> &'static Product {
        self.session.carousel.current()
    }

    pub fn carousel_next(&mut self) -> &'static Product {
        self.session.carousel.next()
    }

    pub fn carousel_prev(&mut self) -> &'static Product {
        self.session.carousel.prev()
    }

    // ---- Contact form ----

    pub fn contact_submit(&self, json: &str) -> ContactReport {
        let input: ContactInput = match serde_json::from_str(json) {
            Ok(input) => input,
            Err(err) => {
                // Shell bug, not user error: validate an empty form so the
                // required-field messages still show.
                log::error!("contact_submit: malformed payload: {err}");
                ContactInput::default()
            }
        };
        portfolio_core::submit(&input)
    }
}
