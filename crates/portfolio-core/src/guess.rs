use crate::rng::Rng;

/// Message shown for non-numeric or out-of-range input.
pub const RANGE_ERROR: &str = "Please enter a valid number between 1 and 10.";

const SECRET_MIN: u32 = 1;
const SECRET_MAX: u32 = 10;

/// Result of one guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Input was not an integer in [1, 10].
    Invalid,
    Win { guess: u32, secret: u32 },
    Miss { guess: u32, secret: u32 },
}

impl GuessOutcome {
    /// User-facing message for the result area.
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Invalid => RANGE_ERROR.to_owned(),
            GuessOutcome::Win { guess, secret } => format!(
                "You guessed {}. The correct number was {}. You win!",
                guess, secret
            ),
            GuessOutcome::Miss { guess, secret } => format!(
                "You guessed {}. The correct number was {}. Try again!",
                guess, secret
            ),
        }
    }
}

/// The number-guessing mini-game: one secret integer in [1, 10].
pub struct GuessingGame {
    secret: u32,
    rng: Rng,
}

impl GuessingGame {
    pub fn new(mut rng: Rng) -> Self {
        let secret = rng.next_range(SECRET_MIN, SECRET_MAX);
        Self { secret, rng }
    }

    /// Evaluate one attempt. The secret is regenerated after every attempt,
    /// including invalid ones — the original page rolls a new number after
    /// each click regardless of outcome, and that behavior is kept as-is.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let outcome = match input.trim().parse::<u32>() {
            Ok(g) if (SECRET_MIN..=SECRET_MAX).contains(&g) => {
                if g == self.secret {
                    GuessOutcome::Win {
                        guess: g,
                        secret: self.secret,
                    }
                } else {
                    GuessOutcome::Miss {
                        guess: g,
                        secret: self.secret,
                    }
                }
            }
            _ => GuessOutcome::Invalid,
        };
        self.secret = self.rng.next_range(SECRET_MIN, SECRET_MAX);
        outcome
    }

    /// The current secret. Exposed for tests and debugging only.
    pub fn secret(&self) -> u32 {
        self.secret
    }
}
