pub mod carousel;
pub mod contact;
pub mod guess;
pub mod reveal;
pub mod rng;
pub mod session;
pub mod theme;
pub mod time;

#[cfg(feature = "physics")]
pub mod plinko;

// Re-export key types at crate root for convenience
pub use carousel::{Carousel, Product, PRODUCTS};
pub use contact::{
    submit, validate, ContactInput, ContactMode, ContactReport, Field, FieldError, Submission,
    ValidationError,
};
pub use guess::{GuessOutcome, GuessingGame, RANGE_ERROR};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use rng::Rng;
pub use session::PageSession;
pub use theme::Theme;
pub use time::Cadence;

#[cfg(feature = "physics")]
pub use plinko::{Board, BoardConfig, BoardLayout, Landing, PlinkoGame};
