//! Error types for the guessing game core.

use derive_more::{Display, Error};

/// Errors produced by game construction and session operations.
///
/// These are contract violations or validation failures, never normal game
/// outcomes: an out-of-range guess is reported through
/// [`GuessOutcome::Invalid`](crate::GuessOutcome::Invalid) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A game was constructed with a secret outside the valid range.
    #[display("secret number {secret} is out of range")]
    OutOfRange {
        /// The rejected secret value.
        secret: i32,
    },
    /// A guess was made on a game that has already been won or lost.
    #[display("no more guesses allowed")]
    InvalidState,
    /// A session operation was called with no active game.
    #[display("no active game in this session")]
    NoActiveGame,
}
