//! End-to-end tests for the non-interactive subcommands.

use std::process::Command;

fn morpion(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_morpion"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run morpion")
}

#[test]
fn test_solve_prints_best_move() {
    let output = morpion(&["solve", "XX./OO./..."]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // Counts are even, so X is to move and completes the top row.
    assert!(stdout.contains("X to move wins with perfect play (+1)"), "{stdout}");
    assert!(stdout.contains("Best move: Top-right (row 0, col 2)"), "{stdout}");
}

#[test]
fn test_solve_for_second_side_json() {
    let output = morpion(&["solve", "XX./OO./...", "--side", "o", "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["side"], "Second");
    assert_eq!(report["score"], 1);
    assert_eq!(report["best_move"]["row"], 0);
    assert_eq!(report["best_move"]["col"], 2);
}

#[test]
fn test_solve_rejects_bad_board() {
    let output = morpion(&["solve", "XX?/.../..."]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid board"), "{stderr}");
}

#[test]
fn test_selfplay_draws() {
    let output = morpion(&["selfplay"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("1. X Top-left"), "{stdout}");
    assert!(stdout.trim_end().ends_with("Draw"), "{stdout}");
}
