//! End-of-game scenarios driven through the public `Game` API.

use goldred_core::{
    Color, Game, MoveError, MoveOutcome, MoveRecord, Square, is_checkmate,
};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play(game: &mut Game, from: &str, to: &str) -> MoveRecord {
    match game.attempt_move(sq(from), sq(to)) {
        MoveOutcome::Applied(record) => record,
        other => panic!("{from}{to} not applied: {other:?}"),
    }
}

#[test]
fn test_fools_mate() {
    let mut game = Game::new();
    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    let record = play(&mut game, "d8", "h4");

    assert_eq!(record.text, "Red Queen moved to h4 - Checkmate!");
    assert!(game.is_game_over());
    assert!(game.in_check(Color::Gold));
    assert!(is_checkmate(game.position(), Color::Gold));
}

#[test]
fn test_no_input_accepted_after_checkmate() {
    let mut game = Game::new();
    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    play(&mut game, "d8", "h4");

    assert_eq!(
        game.attempt_move(sq("a2"), sq("a3")),
        MoveOutcome::Rejected(MoveError::GameOver)
    );
    assert!(game.legal_destinations(sq("a2")).is_empty());
    // History stays browsable after the game ends.
    assert_eq!(game.history().len(), 4);
    assert!(game.navigate_previous().is_some());
}

#[test]
fn test_check_that_can_be_parried_does_not_end_the_game() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    let record = play(&mut game, "d1", "h5");
    // Qh5 eyes f7 but g6/Nf6 defend; merely threatening is not check.
    assert!(!record.text.contains("Check"));

    play(&mut game, "b8", "c6");
    let record = play(&mut game, "h5", "f7");
    assert!(record.text.ends_with(" - Check!"), "got {:?}", record.text);
    assert!(!game.is_game_over());

    // Red must answer the check; an unrelated move is refused.
    assert_eq!(
        game.attempt_move(sq("a7"), sq("a6")),
        MoveOutcome::Rejected(MoveError::InvalidMove)
    );
    play(&mut game, "e8", "f7");
    assert!(!game.in_check(Color::Red));
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play(&mut game, "e2", "e4");
    play(&mut game, "e7", "e5");
    play(&mut game, "f1", "c4");
    play(&mut game, "b8", "c6");
    play(&mut game, "d1", "h5");
    play(&mut game, "g8", "f6");
    let record = play(&mut game, "h5", "f7");

    assert!(record.text.ends_with(" - Checkmate!"), "got {:?}", record.text);
    assert!(game.is_game_over());
    assert!(is_checkmate(game.position(), Color::Red));
}

#[test]
fn test_undo_reopens_a_finished_game() {
    let mut game = Game::new();
    play(&mut game, "f2", "f3");
    play(&mut game, "e7", "e5");
    play(&mut game, "g2", "g4");
    play(&mut game, "d8", "h4");
    assert!(game.is_game_over());

    assert!(game.undo_last());
    assert!(!game.is_game_over());
    assert_eq!(game.current_side(), Color::Red);
    assert_eq!(game.history().len(), 3);

    // Red can now choose a quieter move.
    play(&mut game, "d8", "e7");
    assert!(!game.is_game_over());
}
