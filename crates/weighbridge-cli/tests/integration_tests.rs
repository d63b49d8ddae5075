//! Integration tests for the weighbridge binary.
//!
//! Captured stdout is not a TTY, so `auto` resolves to the plain format and
//! the reading arrives as a bare number.

use assert_cmd::Command;
use predicates::prelude::*;

fn weighbridge() -> Command {
    Command::cargo_bin("weighbridge").unwrap()
}

#[test]
fn bare_invocation_prints_the_metric_reading() {
    weighbridge().assert().success().stdout("12.6\n");
}

#[test]
fn quiet_does_not_suppress_the_reading() {
    weighbridge()
        .arg("--quiet")
        .assert()
        .success()
        .stdout("12.6\n");
}

#[test]
fn verbose_diagnostics_stay_on_stderr() {
    weighbridge()
        .arg("-vv")
        .assert()
        .success()
        .stdout("12.6\n")
        .stderr(predicate::str::contains("Converted to metric"));
}

#[test]
fn plain_format_is_explicit() {
    weighbridge()
        .args(["--format", "plain"])
        .assert()
        .success()
        .stdout("12.6\n");
}

#[test]
fn human_format_carries_the_unit() {
    weighbridge()
        .args(["--format", "human", "--no-color"])
        .assert()
        .success()
        .stdout("12.6 kg\n");
}

#[test]
fn json_format_is_machine_readable() {
    weighbridge()
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout("{\"kilograms\":12.6}\n");
}

#[test]
fn help_mentions_the_binary() {
    weighbridge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("weighbridge"));
}

#[test]
fn version_matches_cargo() {
    weighbridge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_any_value_is_honoured() {
    // Per no-color.org, any non-empty value counts as set; it must never
    // break the run.
    for value in ["1", "true", "yes", "anything"] {
        weighbridge()
            .env("NO_COLOR", value)
            .assert()
            .success()
            .stdout("12.6\n");
    }
}

#[test]
fn help_and_version_exit_zero_with_no_color_set() {
    weighbridge()
        .env("NO_COLOR", "1")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("weighbridge"));
    weighbridge()
        .env("NO_COLOR", "1")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unimplemented_config_path_warns_but_still_reads() {
    weighbridge()
        .args(["--config", "/nonexistent/weighbridge.toml"])
        .assert()
        .success()
        .stdout("12.6\n")
        .stderr(predicate::str::contains("not implemented"));
}

#[test]
fn unknown_flag_exits_two() {
    weighbridge().arg("--units").assert().failure().code(2);
}

#[test]
fn repeated_runs_are_deterministic() {
    for _ in 0..3 {
        weighbridge().assert().success().stdout("12.6\n");
    }
}
