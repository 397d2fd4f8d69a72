//! CLI binary tests
//!
//! Every case here fails or finishes before a request would be sent, so no
//! backend is needed. The config file is pointed at a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `wcgen` with an isolated config file and an unroutable backend.
fn wcgen(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wcgen").expect("binary should build");
    cmd.env("WCGEN_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--api-url", "http://127.0.0.1:9"]);
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("generate")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("lookup"))
                .and(predicate::str::contains("export"))
                .and(predicate::str::contains("dashboard"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn short_text_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args(["generate", "--text", "short"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 10"));
}

#[test]
fn url_without_scheme_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args(["generate", "--url", "example.com/article"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http:// or https://"));
}

#[test]
fn invalid_option_fails_before_any_request() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args([
            "generate",
            "--text",
            "plenty of words to make a cloud",
            "--colors",
            "sparkly",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color_scheme 'sparkly'"));
}

#[test]
fn two_sources_are_rejected_by_the_parser() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args([
            "generate",
            "--text",
            "plenty of words",
            "--url",
            "https://example.com",
        ])
        .assert()
        .code(2);
}

#[test]
fn unknown_export_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args(["export", "42", "--format", "gif"])
        .assert()
        .code(2);
}

#[test]
fn config_init_then_show() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    assert!(dir.path().join("config.toml").exists());

    wcgen(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    wcgen(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]").and(predicate::str::contains("base_url")));
}

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("config.toml").to_string_lossy().into_owned(),
        ));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[api]\nbase_url = \"localhost:5000\"\n",
    )
    .unwrap();
    wcgen(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn unreachable_backend_gets_generic_message_and_hint() {
    let dir = TempDir::new().unwrap();
    wcgen(&dir)
        .args([
            "generate",
            "--text",
            "plenty of words to make a cloud",
        ])
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("An error occurred while generating the word cloud")
                .and(predicate::str::contains("Hint: Check that the backend")),
        );
}
