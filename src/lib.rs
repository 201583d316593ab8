//! Guessnum library - number guessing game core
//!
//! The game rules and session orchestration behind a small multi-player
//! guessing-game web application. The transport layer (routes, templates,
//! session timeouts) lives outside this crate and consumes it through three
//! types:
//!
//! - **GuessingGame**: state machine for one round - secret number, attempt
//!   budget, guess classification
//! - **PlayerSession**: per-player service - at most one active game,
//!   reports terminal outcomes
//! - **GameCenter**: process-wide statistics aggregator and factory for
//!   games and sessions
//!
//! # Example
//!
//! ```
//! use guessnum::{GameCenter, GuessOutcome};
//!
//! let center = GameCenter::new();
//! let session = center.new_player_session();
//!
//! let game = session.current_game();
//! let outcome = session.make_guess(game.secret())?;
//! assert_eq!(outcome, GuessOutcome::Won);
//!
//! session.finished_game();
//! println!("{}", center.stats_message());
//! # Ok::<(), guessnum::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod player;
mod stats;

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Game state machine
pub use game::{GuessOutcome, GuessingGame, MAX_ATTEMPTS, UPPER_BOUND};

// Crate-level exports - Player sessions
pub use player::{PlayerSession, SessionStats};

// Crate-level exports - Sitewide statistics
pub use stats::{GameCenter, SiteStats, NO_GAMES_MESSAGE};
