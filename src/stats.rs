//! Sitewide game statistics and factories for games and player sessions.

use crate::game::GuessingGame;
use crate::player::PlayerSession;
use derive_getters::Getters;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Message shown while no games have been completed.
pub const NO_GAMES_MESSAGE: &str = "No games have been played so far.";

/// Immutable snapshot of the sitewide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct SiteStats {
    /// Total games finished across all players.
    total_games: u64,
    /// Games won across all players.
    games_won: u64,
}

impl SiteStats {
    /// Win percentage rounded half-up to the nearest integer.
    ///
    /// Zero when no games have been played.
    pub fn win_percent(&self) -> u64 {
        if self.total_games == 0 {
            return 0;
        }
        ((self.games_won as f64 / self.total_games as f64) * 100.0).round() as u64
    }
}

/// Coordinates the state of the application and keeps sitewide statistics.
///
/// One instance exists per running process; sessions share it through cheap
/// clones of this handle. All counter reads and writes go through a single
/// mutex so concurrently finishing sessions never lose updates and
/// [`stats_message`](GameCenter::stats_message) never observes a torn pair.
#[derive(Debug, Clone, Default)]
pub struct GameCenter {
    stats: Arc<Mutex<SiteStats>>,
}

impl GameCenter {
    /// Creates a game center with zeroed statistics.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game center");
        Self::default()
    }

    /// Creates a new player session bound to this center.
    #[instrument(skip(self))]
    pub fn new_player_session(&self) -> PlayerSession {
        info!("New player session created");
        PlayerSession::new(self.clone())
    }

    /// Creates a new game with a random secret.
    pub fn new_game(&self) -> GuessingGame {
        GuessingGame::new_random()
    }

    /// Records a finished game in the sitewide statistics.
    #[instrument(skip(self))]
    pub fn report_game_finished(&self, won: bool) {
        let mut stats = self.stats.lock().unwrap();
        stats.total_games += 1;
        if won {
            stats.games_won += 1;
        }
        debug!(
            total_games = stats.total_games,
            games_won = stats.games_won,
            "Recorded finished game"
        );
    }

    /// Returns a consistent snapshot of the sitewide counters.
    pub fn stats(&self) -> SiteStats {
        *self.stats.lock().unwrap()
    }

    /// A user-facing message about the sitewide statistics.
    #[instrument(skip(self))]
    pub fn stats_message(&self) -> String {
        let stats = self.stats();
        match stats.total_games {
            0 => NO_GAMES_MESSAGE.to_string(),
            1 => format!(
                "One game has been played so far. Players have won {}% of games.",
                stats.win_percent()
            ),
            n => format!(
                "There have been {} games played. Players have won {}% of those games.",
                n,
                stats.win_percent()
            ),
        }
    }
}
