//! Runs the `aoc` binary against inputs written to a temporary directory

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const DAY_1: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

fn aoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc"))
        .args(args)
        .output()
        .expect("failed to launch aoc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_input_dir_layout() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("day01.txt"), DAY_1).unwrap();

    let output = aoc(&["1", "--input-dir", temp.path().to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Day 1\nPart 1: 3\n===========================\nPart 2: 6\n"
    );
}

#[test]
fn test_explicit_input_quiet_single_part() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("anything.txt");
    fs::write(&path, DAY_1).unwrap();

    let output = aoc(&["1", "-i", path.to_str().unwrap(), "-q", "-p", "2"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "6\n");
}

#[test]
fn test_timings_follow_answers() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("day01.txt");
    fs::write(&path, DAY_1).unwrap();

    let output = aoc(&["1", "-i", path.to_str().unwrap(), "-q", "--timings"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(&lines[..2], &["3", "6"]);
    assert!(lines[2].starts_with("Parse: "), "{text}");
    assert!(lines[3].starts_with("Part 1 solve: "), "{text}");
    assert!(lines[4].starts_with("Part 2 solve: "), "{text}");
}

#[test]
fn test_missing_input_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let output = aoc(&["4", "--input-dir", temp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Error: "), "{err}");
    assert!(err.contains("day04.txt"), "{err}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_parse_error_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("day08.txt");
    fs::write(&path, "1,2,3\n4,5,six\n").unwrap();

    let output = aoc(&["8", "-i", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid line 2"), "{}", stderr(&output));
}

#[test]
fn test_day_validation_messages() {
    let output = aoc(&["abc"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("The day must be a number. Got: abc"));

    let output = aoc(&["30"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("The day must be a number within the range [1, 25]. Got: 30"));
}
