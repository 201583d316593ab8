//! State machine for a single number-guessing round.

use crate::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Exclusive upper bound on the secret number and on valid guesses.
pub const UPPER_BOUND: i32 = 10;

/// Number of guess attempts allotted per game.
pub const MAX_ATTEMPTS: u32 = 3;

/// The result of a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessOutcome {
    /// The guess was outside the valid range; no attempt was consumed.
    Invalid,
    /// The guess missed and attempts remain.
    Wrong,
    /// The guess matched the secret.
    Won,
    /// The guess missed and the attempt budget is exhausted.
    Lost,
}

impl GuessOutcome {
    /// Whether this outcome ends the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GuessOutcome::Won | GuessOutcome::Lost)
    }
}

/// One guessing game: a fixed secret and a shrinking attempt budget.
///
/// The game is terminal once a guess returns [`GuessOutcome::Won`] or
/// [`GuessOutcome::Lost`]; further guesses are a caller error.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{{Game {secret}}}")]
pub struct GuessingGame {
    secret: i32,
    guesses_left: u32,
    last_outcome: Option<GuessOutcome>,
}

impl GuessingGame {
    /// Creates a game with a known secret.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] when `secret` falls outside
    /// `[0, UPPER_BOUND)`.
    #[instrument]
    pub fn new(secret: i32) -> Result<Self, GameError> {
        if !Self::is_valid_guess(secret) {
            warn!(secret, "Rejected out-of-range secret");
            return Err(GameError::OutOfRange { secret });
        }
        debug!(secret, "Game created");
        Ok(Self {
            secret,
            guesses_left: MAX_ATTEMPTS,
            last_outcome: None,
        })
    }

    /// Creates a game with a secret drawn uniformly from `[0, UPPER_BOUND)`.
    #[instrument]
    pub fn new_random() -> Self {
        let secret = rand::rng().random_range(0..UPPER_BOUND);
        debug!(secret, "Game created with random secret");
        Self {
            secret,
            guesses_left: MAX_ATTEMPTS,
            last_outcome: None,
        }
    }

    /// Whether `value` falls within the game bounds. Does not issue a guess.
    pub fn is_valid_guess(value: i32) -> bool {
        (0..UPPER_BOUND).contains(&value)
    }

    /// True while no guess has been made yet.
    pub fn is_beginning(&self) -> bool {
        self.guesses_left == MAX_ATTEMPTS
    }

    /// Whether the attempt budget still has guesses in it.
    pub fn has_more_guesses(&self) -> bool {
        self.guesses_left > 0
    }

    /// Number of guesses left in this game.
    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// The secret number, for display once the round is over.
    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Whether the game was won or lost with the last guess.
    pub fn is_finished(&self) -> bool {
        self.last_outcome.is_some_and(|o| o.is_terminal())
    }

    /// Makes a guess on the game.
    ///
    /// An out-of-range `value` yields [`GuessOutcome::Invalid`] without
    /// consuming an attempt or touching any other state. A valid guess
    /// consumes one attempt and is classified with correctness checked before
    /// exhaustion, so a correct guess on the final attempt is still
    /// [`GuessOutcome::Won`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] when the game is already finished.
    #[instrument(skip(self), fields(guesses_left = self.guesses_left))]
    pub fn make_guess(&mut self, value: i32) -> Result<GuessOutcome, GameError> {
        if !Self::is_valid_guess(value) {
            debug!(value, "Out-of-range guess");
            return Ok(GuessOutcome::Invalid);
        }
        if self.is_finished() {
            warn!("Guess attempted on a finished game");
            return Err(GameError::InvalidState);
        }

        self.guesses_left -= 1;
        let outcome = if value == self.secret {
            GuessOutcome::Won
        } else if self.has_more_guesses() {
            GuessOutcome::Wrong
        } else {
            GuessOutcome::Lost
        };
        self.last_outcome = Some(outcome);

        debug!(value, ?outcome, guesses_left = self.guesses_left, "Guess made");
        Ok(outcome)
    }
}
