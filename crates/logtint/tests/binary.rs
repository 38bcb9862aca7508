//! Tests that drive the compiled `logtint` binary over stdin/stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_logtint"))
        .args(args)
        .env_remove("LOGTINT_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn piped_stdout_is_plain() {
    let output = run_with_stdin("{\"level\":\"info\",\"message\":\"hello\"}\n", &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "level : info\nmessage : hello\ndata :\n\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn decode_failure_exits_non_zero() {
    let output = run_with_stdin(
        "{\"level\":\"info\",\"message\":\"ok\"}\nnot-json\n{\"level\":\"info\",\"message\":\"later\"}\n",
        &[],
    );

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "level : info\nmessage : ok\ndata :\n\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line 2"), "{stderr}");
}

#[test]
fn dropped_records_are_silent_by_default() {
    let output = run_with_stdin("{\"level\":\"trace\"}\n{\"nolevel\":1}\n", &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn dropped_records_are_reported_at_debug_verbosity() {
    let output = run_with_stdin("{\"level\":\"trace\"}\n", &["-vv"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unrecognized severity"), "{stderr}");
}

#[test]
fn dropped_non_string_level_is_reported_verbatim() {
    let output = run_with_stdin("{\"level\":4}\n", &["-vv"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let stderr = console::strip_ansi_codes(&stderr);
    assert!(stderr.contains("level=4"), "{stderr}");
}

#[test]
fn startup_event_reports_styling_decision() {
    let output = run_with_stdin("", &["-v"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let stderr = console::strip_ansi_codes(&stderr);
    assert!(stderr.contains("styled=false"), "{stderr}");
}

#[test]
fn missing_input_file_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.jsonl");

    let output = Command::new(env!("CARGO_BIN_EXE_logtint"))
        .arg("--input")
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unable to open input file"), "{stderr}");
}
