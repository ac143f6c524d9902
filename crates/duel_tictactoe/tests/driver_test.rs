//! Tests for the turn loop and the end-to-end scenarios.

use duel_tictactoe::{
    Board, Duel, DuelError, EvaluationMode, GameRecord, GameStatus, Mover, SequentialEvaluator,
};

fn board(wire: [i8; 9]) -> Board {
    Board::from_wire(wire).expect("valid wire board")
}

#[test]
fn test_empty_board_mover_a_takes_center() {
    let duel = Duel::new(EvaluationMode::Parallel);
    assert_eq!(duel.evaluate().best(), Some((4, 10)));
}

#[test]
fn test_immediate_win_is_taken() {
    let mut duel = Duel::from_board(
        board([1, 1, 0, -1, -1, 0, 0, 0, 0]),
        Mover::A,
        EvaluationMode::Parallel,
    );
    let turn = duel.step().expect("legal move");
    assert_eq!((turn.index, turn.score), (2, 100));
    assert_eq!(duel.status(), GameStatus::Won(Mover::A));
}

#[test]
fn test_threat_is_blocked() {
    let mut duel = Duel::from_board(
        board([1, 1, 0, 0, -1, 0, 0, -1, 0]),
        Mover::B,
        EvaluationMode::Parallel,
    );
    let turn = duel.step().expect("legal move");
    assert_eq!((turn.index, turn.score), (2, 80));
    assert_eq!(duel.status(), GameStatus::InProgress);
    assert_eq!(duel.mover(), Mover::A);
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let duel = Duel::from_board(
        board([1, -1, 1, -1, 1, 1, -1, 1, -1]),
        Mover::A,
        SequentialEvaluator,
    );
    assert_eq!(duel.status(), GameStatus::Draw);
}

#[test]
fn test_last_move_filling_board_is_draw() {
    let mut duel = Duel::from_board(
        board([1, -1, 1, -1, 1, 1, -1, 1, 0]),
        Mover::B,
        SequentialEvaluator,
    );
    assert_eq!(duel.play(), Ok(GameStatus::Draw));
    assert_eq!(duel.history().len(), 1);
    assert_eq!(duel.history()[0].index, 8);
}

#[test]
fn test_full_game_is_deterministic_draw() {
    let mut duel = Duel::new(EvaluationMode::Parallel);
    let mut seen = Vec::new();
    let outcome = duel
        .play_with(|turn, _| seen.push((turn.mover, turn.index, turn.score)))
        .expect("game completes");

    assert_eq!(outcome, GameStatus::Draw);
    assert_eq!(
        seen,
        vec![
            (Mover::A, 4, 10),
            (Mover::B, 1, 4),
            (Mover::A, 0, 5),
            (Mover::B, 8, 80),
            (Mover::A, 2, 5),
            (Mover::B, 6, 80),
            (Mover::A, 7, 80),
            (Mover::B, 3, 4),
            (Mover::A, 5, 3),
        ]
    );
    assert_eq!(duel.board().to_wire(), [1, -1, 1, -1, 1, 1, -1, 1, -1]);
}

#[test]
fn test_movers_alternate() {
    let mut duel = Duel::new(SequentialEvaluator);
    duel.play().expect("game completes");
    for pair in duel.history().windows(2) {
        assert_eq!(pair[1].mover, pair[0].mover.opponent());
        assert_eq!(pair[1].number, pair[0].number + 1);
    }
}

#[test]
fn test_no_turns_after_terminal_state() {
    let mut duel = Duel::new(SequentialEvaluator);
    let outcome = duel.play().expect("game completes");
    let turns = duel.history().len();
    assert!(matches!(duel.step(), Err(DuelError::GameOver { status }) if status == outcome));
    assert_eq!(duel.history().len(), turns);
}

#[test]
fn test_record_survives_json() {
    let mut duel = Duel::new(EvaluationMode::Sequential);
    duel.play().expect("game completes");
    let record = duel.record();

    let json = record.to_json().expect("serializes");
    let parsed = GameRecord::from_json(&json).expect("parses");
    assert_eq!(parsed, record);
    assert_eq!(*parsed.outcome(), GameStatus::Draw);
    assert_eq!(parsed.turns().len(), 9);
}
