//! Integration tests for error reporting and exit codes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_bad_file_period_exits_with_config_error() {
    let env = TestEnv::new();
    env.write_config(r#"{"CLI_LOOP_PERIOD":"bad"}"#);

    env.command()
        .arg("show")
        .assert()
        .code(7)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: configuration error: invalid duration for LoopPeriod: \"bad\"",
        ));
}

#[test]
fn test_bad_env_lapse_exits_with_config_error() {
    let env = TestEnv::new();
    env.write_config(r#"{"CLI_LOOP_LAPSE":"2m"}"#);

    env.command()
        .env("CLI_LOOP_LAPSE", "soon")
        .arg("run")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("LoopLapse"))
        .stderr(predicate::str::contains("\"soon\""));
}

#[test]
fn test_empty_env_duration_is_config_error() {
    let env = TestEnv::new();

    env.command()
        .env("CLI_LOOP_PERIOD", "")
        .arg("validate")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("LoopPeriod"));
}

#[test]
fn test_config_error_reported_even_when_quiet() {
    let env = TestEnv::new();

    env.command()
        .env("CLI_LOOP_PERIOD", "-1s")
        .args(["--quiet", "run"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let env = TestEnv::new();

    env.command()
        .arg("reserve")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_show_format_is_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["show", "--format", "toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
