//! CLI integration tests.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn chat_api() -> Command {
    let mut cmd = cargo_bin_cmd!("chat-api");
    for key in [
        "LLM_MODE",
        "API_HOST",
        "API_PORT",
        "BEDROCK_MAX_TOKENS",
        "BEDROCK_TEMPERATURE",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn instant_mock_config() -> NamedTempFile {
    write_temp_config("[logging]\nlevel = \"warn\"\n\n[mock]\nmin_delay_ms = 0\nmax_delay_ms = 0\n")
}

#[test]
fn help_lists_subcommands() {
    chat_api()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("probe"));
}

#[test]
fn version_prints_name() {
    chat_api()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat-api"));
}

#[test]
fn probe_runs_both_operations_in_mock_mode() {
    let config = instant_mock_config();
    chat_api()
        .args(["probe", "--mode", "mock", "--message", "hello there", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dummy-claude-3-haiku"))
        .stdout(predicate::str::contains("Processing prompt"))
        .stdout(predicate::str::contains("financial AI assistant"))
        .stdout(predicate::str::contains("Probe complete"));
}

#[test]
fn probe_emits_json_records() {
    let config = instant_mock_config();
    chat_api()
        .args(["--json", "probe", "--mode", "dummy", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"generate""#))
        .stdout(predicate::str::contains(r#""type":"chat""#))
        .stdout(predicate::str::contains(r#""role":"assistant""#));
}

#[test]
fn probe_live_without_credentials_fails() {
    let config = instant_mock_config();
    chat_api()
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .env_remove("AWS_PROFILE")
        .env_remove("AWS_WEB_IDENTITY_TOKEN_FILE")
        .env_remove("AWS_CONTAINER_CREDENTIALS_RELATIVE_URI")
        .env_remove("AWS_CONTAINER_CREDENTIALS_FULL_URI")
        .env("AWS_CONFIG_FILE", "/nonexistent/aws/config")
        .env("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/aws/credentials")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .args(["probe", "--mode", "live", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bedrock client not initialized"));
}

#[test]
fn invalid_config_exits_nonzero() {
    let config = write_temp_config("[bedrock]\ntemperature = 1.5\n");
    chat_api()
        .args(["probe", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("temperature"));
}

#[test]
fn unknown_mode_flag_is_rejected() {
    chat_api()
        .args(["serve", "--mode", "openai"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must be 'mock' or 'live'"));
}
