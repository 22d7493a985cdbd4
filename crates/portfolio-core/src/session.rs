use crate::carousel::Carousel;
use crate::guess::GuessingGame;
#[cfg(feature = "physics")]
use crate::plinko::{BoardConfig, PlinkoGame};
use crate::reveal::RevealTracker;
use crate::rng::Rng;
use crate::theme::Theme;

/// All per-page-load state in one place.
///
/// The original script kept these as free module globals; making them fields
/// of an explicit session struct gives each feature a clear owner and makes
/// the whole page testable without a browser.
pub struct PageSession {
    pub theme: Theme,
    pub reveal: RevealTracker,
    pub guess: GuessingGame,
    pub carousel: Carousel,
    #[cfg(feature = "physics")]
    pub plinko: PlinkoGame,
}

impl PageSession {
    /// Build a fresh session. Every random stream (secret number, basket
    /// multipliers, launch jitter) derives from the one seed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        Self {
            theme: Theme::default(),
            reveal: RevealTracker::new(),
            guess: GuessingGame::new(rng.fork()),
            carousel: Carousel::new(),
            #[cfg(feature = "physics")]
            plinko: PlinkoGame::new(BoardConfig::default(), rng.fork()),
        }
    }

    /// Feed elapsed wall-clock time to the time-driven subsystems.
    #[cfg(feature = "physics")]
    pub fn tick(&mut self, dt: f32) {
        self.plinko.advance(dt);
    }
}
