//! Tests for the console runner.

use duel::{Cli, run};
use duel_tictactoe::{EvaluationMode, GameRecord, GameStatus};

fn cli(evaluation: EvaluationMode, record: Option<std::path::PathBuf>) -> Cli {
    Cli { evaluation, record }
}

#[test]
fn test_transcript_ends_with_outcome() {
    let mut out = Vec::new();
    let outcome = run(&cli(EvaluationMode::Parallel, None), &mut out).expect("game runs");
    let transcript = String::from_utf8(out).unwrap();

    assert_eq!(outcome, GameStatus::Draw);
    assert!(
        transcript
            .starts_with("Turn 1: mover A (X) plays cell 4 (Center) with score 10\n...\n.X.\n...\n")
    );
    assert_eq!(transcript.lines().last(), Some("Outcome: Draw"));
    assert_eq!(transcript.matches("Turn ").count(), 9);
}

#[test]
fn test_modes_print_same_transcript() {
    let mut parallel = Vec::new();
    let mut sequential = Vec::new();
    run(&cli(EvaluationMode::Parallel, None), &mut parallel).unwrap();
    run(&cli(EvaluationMode::Sequential, None), &mut sequential).unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_record_is_written() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("game.json");

    let mut out = Vec::new();
    run(&cli(EvaluationMode::Sequential, Some(path.clone())), &mut out).expect("game runs");

    let json = std::fs::read_to_string(&path).expect("record exists");
    let record = GameRecord::from_json(&json).expect("valid record");
    assert_eq!(*record.outcome(), GameStatus::Draw);
    assert_eq!(record.turns().len(), 9);
    assert_eq!(*record.final_board(), [1, -1, 1, -1, 1, 1, -1, 1, -1]);
}

#[test]
fn test_unwritable_record_path_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing").join("game.json");

    let mut out = Vec::new();
    let err = run(&cli(EvaluationMode::Parallel, Some(path)), &mut out).unwrap_err();
    assert!(err.to_string().contains("Failed to write record"));
}
