//! Runs the `eight-tiles` binary end to end.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], input: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_eight-tiles");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start eight-tiles");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).unwrap();
    drop(stdin);

    child.wait_with_output().expect("failed to wait on child")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn solve_flag_prints_numbered_path() {
    let output = run(&["--board", "123456708", "--solve"], "");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("1.\n1 2 3\n4 5 6\n7   8\nHeuristic value: 2"));
    assert!(text.contains("2.\n1 2 3\n4 5 6\n7 8  \nHeuristic value: 0"));
    assert!(text.contains("Done."));
}

#[test]
fn impossible_board_reports_best_found() {
    let output = run(&["--board", "213456780", "--solve"], "");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("All 181440 boards have been tried."));
    assert!(text.contains("impossible to solve"));
}

#[test]
fn malformed_board_fails() {
    let output = run(&["--board", "12345", "--solve"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected 9 digits"));
}

#[test]
fn interactive_moves_until_solved() {
    let output = run(&["--board", "123456078"], "5\n7\n8\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("*** Invalid move"));
    assert!(text.contains("Solved!"));
}

#[test]
fn interactive_hands_off_to_search() {
    let output = run(&["--board", "123405786"], "s\n");
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Solving puzzle automatically"));
    assert!(text.contains("Heuristic value: 0"));
}

#[test]
fn exit_command_stops_the_session() {
    let output = run(&["--seed", "3"], "x\n");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Exiting program..."));
}
