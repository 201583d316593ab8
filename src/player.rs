//! Per-player game orchestration.

use crate::error::GameError;
use crate::game::{GuessOutcome, GuessingGame};
use crate::stats::GameCenter;
use derive_getters::Getters;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Immutable snapshot of a session's own bookkeeping.
///
/// These counters track the player's results within one session. The
/// personal win-rate message built on top of them is unresolved product-wise
/// (see DESIGN.md), so only the raw counts are exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SessionStats {
    /// Games this player has won in the session.
    wins: u32,
    /// Games this player has finished in the session.
    games_played: u32,
}

#[derive(Debug, Default)]
struct SessionState {
    game: Option<GuessingGame>,
    stats: SessionStats,
}

/// Mediates between one player and their current game.
///
/// A session owns at most one active game at a time, created lazily through
/// the shared [`GameCenter`], and reports each terminal outcome back to the
/// center exactly once. All operations are internally synchronized, so a
/// rapid double-submit from the same player never creates two games or
/// applies a guess to a half-constructed one.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    center: GameCenter,
    state: Arc<Mutex<SessionState>>,
}

impl PlayerSession {
    /// Creates a session bound to the given center, with no active game.
    pub(crate) fn new(center: GameCenter) -> Self {
        Self {
            center,
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Returns a snapshot of the current game, creating one through the
    /// center if none is active. Idempotent once a game is active.
    #[instrument(skip(self))]
    pub fn current_game(&self) -> GuessingGame {
        let mut state = self.state.lock().unwrap();
        state
            .game
            .get_or_insert_with(|| {
                info!("Starting new game for session");
                self.center.new_game()
            })
            .clone()
    }

    /// Makes a guess on the active game.
    ///
    /// On a terminal outcome the result is reported to the [`GameCenter`]
    /// and the session counters are updated, exactly once per game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] when no game is active, or
    /// [`GameError::InvalidState`] when the active game is already finished.
    #[instrument(skip(self))]
    pub fn make_guess(&self, value: i32) -> Result<GuessOutcome, GameError> {
        let mut state = self.state.lock().unwrap();
        let game = state.game.as_mut().ok_or(GameError::NoActiveGame)?;
        let outcome = game.make_guess(value)?;

        if outcome.is_terminal() {
            let won = outcome == GuessOutcome::Won;
            state.stats.games_played += 1;
            if won {
                state.stats.wins += 1;
            }
            info!(won, "Game finished, reporting to center");
            self.center.report_game_finished(won);
        }
        Ok(outcome)
    }

    /// Whether the active game has not seen a guess yet.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] when no game is active.
    pub fn is_starting_game(&self) -> Result<bool, GameError> {
        self.with_game(|game| game.is_beginning())
    }

    /// Whether the active game has guesses left.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] when no game is active.
    pub fn has_more_guesses(&self) -> Result<bool, GameError> {
        self.with_game(|game| game.has_more_guesses())
    }

    /// Number of guesses left in the active game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] when no game is active.
    pub fn guesses_left(&self) -> Result<u32, GameError> {
        self.with_game(|game| game.guesses_left())
    }

    /// Indicates that the player is done with the current game.
    ///
    /// No error if no game is active.
    #[instrument(skip(self))]
    pub fn finished_game(&self) {
        let mut state = self.state.lock().unwrap();
        if state.game.take().is_some() {
            debug!("Cleared finished game");
        }
    }

    /// Cleans up the session when it expires. Idempotent; the session host
    /// is expected to call this exactly once per session.
    #[instrument(skip(self))]
    pub fn end_session(&self) {
        let mut state = self.state.lock().unwrap();
        if state.game.take().is_some() {
            info!("Session ended with a game still active");
        }
    }

    /// Returns a snapshot of the session's own counters.
    pub fn session_stats(&self) -> SessionStats {
        self.state.lock().unwrap().stats
    }

    fn with_game<T>(&self, f: impl FnOnce(&GuessingGame) -> T) -> Result<T, GameError> {
        let state = self.state.lock().unwrap();
        let game = state.game.as_ref().ok_or(GameError::NoActiveGame)?;
        Ok(f(game))
    }
}
