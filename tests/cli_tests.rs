use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn patterns() -> Command {
    let mut cmd = cargo_bin_cmd!("patterns");
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn test_help() {
    patterns()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("singleton"))
        .stdout(predicate::str::contains("strategy"));
}

#[test]
fn singleton_console_hands_out_one_instance() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("application.log");

    patterns()
        .args(["singleton", "--log-file"])
        .arg(&log)
        .write_stdin("1 5\n1 99\n2\n3 1 2\n4 hello\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SINGLETON CONTROL CALLS"))
        .stdout(predicate::str::contains("Instance #2 -> id"))
        .stdout(predicate::str::contains("value 99").not())
        .stdout(predicate::str::contains("Instances #1 and #2 are the same: true"))
        .stdout(predicate::str::contains("Log : hello"))
        .stdout(predicate::str::contains("Call will end now"));

    assert_eq!(fs::read_to_string(&log).unwrap(), "hello\n");
}

#[test]
fn singleton_console_survives_bad_commands() {
    let dir = tempfile::tempdir().unwrap();

    patterns()
        .args(["singleton", "--log-file"])
        .arg(dir.path().join("application.log"))
        .write_stdin("7\nnope\n4 early\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command 7"))
        .stdout(predicate::str::contains("Not a command: 'nope'"))
        .stdout(predicate::str::contains("Create an instance before logging"));
}

#[test]
fn singleton_console_exits_nonzero_when_log_cannot_open() {
    let dir = tempfile::tempdir().unwrap();

    patterns()
        .args(["singleton", "--log-file"])
        .arg(dir.path().join("missing").join("application.log"))
        .write_stdin("1 5\n0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open log file"));
}

#[test]
fn strategy_reads_values_from_stdin() {
    patterns()
        .arg("strategy")
        .write_stdin("3 1 4 1 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAPIFY -> 5"))
        .stdout(predicate::str::contains("SORTING -> 5"));
}

#[test]
fn strategy_reports_unknown_key_and_continues() {
    patterns()
        .args(["strategy", "--values", "-2,7,-9", "-k", "bogus", "-k", "SCAN"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unrecognized routing key 'bogus'"))
        .stdout(predicate::str::contains("SCAN -> 7"));
}

#[test]
fn global_flags_switch_to_json_logs() {
    patterns()
        .env_remove("RUST_LOG")
        .args(["--json-logs", "--log-level", "info", "strategy", "--values", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEAPIFY -> 2"))
        .stderr(predicate::str::contains("\"level\":\"INFO\""))
        .stderr(predicate::str::contains("patterns starting"));
}

#[test]
fn unknown_log_level_flag_is_rejected() {
    patterns()
        .args(["--log-level", "loud", "strategy", "--values", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for level"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[strategy]\ninput_len = 0\n").unwrap();

    patterns()
        .args(["strategy", "--config"])
        .arg(&path)
        .write_stdin("1 2 3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for input_len"));
}
