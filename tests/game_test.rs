//! Tests for the guessing game state machine.

use guessnum::{GameError, GuessOutcome, GuessingGame, MAX_ATTEMPTS, UPPER_BOUND};

#[test]
fn test_construction_accepts_in_range_secrets() {
    for secret in 0..UPPER_BOUND {
        assert!(GuessingGame::new(secret).is_ok());
    }
}

#[test]
fn test_construction_rejects_out_of_range_secrets() {
    for secret in [-1, UPPER_BOUND, 15, i32::MIN, i32::MAX] {
        assert_eq!(
            GuessingGame::new(secret),
            Err(GameError::OutOfRange { secret }),
            "secret {secret} should be rejected"
        );
    }
}

#[test]
fn test_random_game_starts_in_bounds() {
    for _ in 0..50 {
        let game = GuessingGame::new_random();
        assert!((0..UPPER_BOUND).contains(&game.secret()));
        assert!(game.is_beginning());
    }
}

#[test]
fn test_validity_predicate_matches_bounds() {
    assert!(GuessingGame::is_valid_guess(0));
    assert!(GuessingGame::is_valid_guess(UPPER_BOUND - 1));
    assert!(!GuessingGame::is_valid_guess(-1));
    assert!(!GuessingGame::is_valid_guess(UPPER_BOUND));
}

#[test]
fn test_fresh_game_state() {
    let game = GuessingGame::new(4).expect("valid secret");
    assert!(game.is_beginning());
    assert_eq!(game.guesses_left(), MAX_ATTEMPTS);
    assert!(game.has_more_guesses());
    assert!(!game.is_finished());
}

#[test]
fn test_correct_guess_wins_on_any_attempt() {
    for winning_attempt in 1..=MAX_ATTEMPTS {
        let mut game = GuessingGame::new(7).expect("valid secret");
        for _ in 1..winning_attempt {
            assert_eq!(game.make_guess(3), Ok(GuessOutcome::Wrong));
        }
        // Correctness beats exhaustion, even on the final attempt
        assert_eq!(game.make_guess(7), Ok(GuessOutcome::Won));
        assert!(game.is_finished());
    }
}

#[test]
fn test_wrong_guesses_run_down_the_budget() {
    let mut game = GuessingGame::new(5).expect("valid secret");

    assert_eq!(game.make_guess(1), Ok(GuessOutcome::Wrong));
    assert_eq!(game.guesses_left(), 2);
    assert!(!game.is_beginning());

    assert_eq!(game.make_guess(2), Ok(GuessOutcome::Wrong));
    assert_eq!(game.guesses_left(), 1);

    assert_eq!(game.make_guess(3), Ok(GuessOutcome::Lost));
    assert_eq!(game.guesses_left(), 0);
    assert!(game.is_finished());
    assert!(!game.has_more_guesses());
}

#[test]
fn test_invalid_guess_consumes_nothing() {
    let mut game = GuessingGame::new(5).expect("valid secret");

    assert_eq!(game.make_guess(15), Ok(GuessOutcome::Invalid));
    assert_eq!(game.guesses_left(), MAX_ATTEMPTS);
    assert!(game.is_beginning());
    assert!(!game.is_finished());

    assert_eq!(game.make_guess(-1), Ok(GuessOutcome::Invalid));
    assert_eq!(game.guesses_left(), MAX_ATTEMPTS);
}

#[test]
fn test_guess_after_terminal_is_a_contract_error() {
    let mut game = GuessingGame::new(5).expect("valid secret");
    assert_eq!(game.make_guess(5), Ok(GuessOutcome::Won));

    assert_eq!(game.make_guess(5), Err(GameError::InvalidState));
    assert_eq!(game.make_guess(1), Err(GameError::InvalidState));

    // Validity is checked first, so out-of-range input still classifies
    // as Invalid rather than erroring
    assert_eq!(game.make_guess(99), Ok(GuessOutcome::Invalid));
}

#[test]
fn test_guess_after_loss_is_a_contract_error() {
    let mut game = GuessingGame::new(5).expect("valid secret");
    for _ in 0..MAX_ATTEMPTS {
        game.make_guess(1).expect("valid guess");
    }
    assert!(game.is_finished());
    assert_eq!(game.make_guess(5), Err(GameError::InvalidState));
}

#[test]
fn test_scenario_win_on_second_guess() {
    let mut game = GuessingGame::new(7).expect("valid secret");
    assert_eq!(game.make_guess(3), Ok(GuessOutcome::Wrong));
    assert_eq!(game.make_guess(7), Ok(GuessOutcome::Won));
    assert_eq!(game.guesses_left(), 1);
    assert!(game.is_finished());
}

#[test]
fn test_scenario_three_misses() {
    let mut game = GuessingGame::new(2).expect("valid secret");
    assert_eq!(game.make_guess(0), Ok(GuessOutcome::Wrong));
    assert_eq!(game.make_guess(1), Ok(GuessOutcome::Wrong));
    assert_eq!(game.make_guess(9), Ok(GuessOutcome::Lost));
    assert_eq!(game.guesses_left(), 0);
}

#[test]
fn test_game_display_shows_secret() {
    let game = GuessingGame::new(7).expect("valid secret");
    assert_eq!(game.to_string(), "{Game 7}");
}

#[test]
fn test_outcome_serializes_lowercase() {
    assert_eq!(
        serde_json::to_value(GuessOutcome::Won).expect("serializable"),
        serde_json::json!("won")
    );
    assert_eq!(
        serde_json::to_value(GuessOutcome::Invalid).expect("serializable"),
        serde_json::json!("invalid")
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        GameError::OutOfRange { secret: 42 }.to_string(),
        "secret number 42 is out of range"
    );
    assert_eq!(GameError::InvalidState.to_string(), "no more guesses allowed");
    assert_eq!(
        GameError::NoActiveGame.to_string(),
        "no active game in this session"
    );
}
