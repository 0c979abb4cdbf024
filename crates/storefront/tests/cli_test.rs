//! Integration tests for the `storefront` CLI binary.
//!
//! Argument parsing, help output, shell completions, and a couple of
//! end-to-end runs against a wiremock upstream.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `storefront` binary with env isolation.
///
/// Clears all `STOREFRONT_*` env vars and points config directories at
/// a nonexistent path so tests never touch the user's real config.
fn storefront_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("storefront");
    cmd.env("HOME", "/tmp/storefront-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/storefront-cli-test-nonexistent")
        .env_remove("STOREFRONT_CONFIG")
        .env_remove("STOREFRONT_DIRECTORY_URL")
        .env_remove("STOREFRONT_CATALOG_URL")
        .env_remove("STOREFRONT_API_TOKEN")
        .env_remove("STOREFRONT_OUTPUT")
        .env_remove("STOREFRONT_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = storefront_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    storefront_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("users")
            .and(predicate::str::contains("products"))
            .and(predicate::str::contains("profile")),
    );
}

#[test]
fn test_version_flag() {
    storefront_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storefront"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    storefront_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    storefront_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = storefront_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_output_format() {
    let output = storefront_cmd()
        .args(["--output", "invalid", "users", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_delete_without_yes_in_pipe_fails() {
    storefront_cmd()
        .args(["users", "delete", "1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation").or(predicate::str::contains("--yes")));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_users_subcommands_exist() {
    storefront_cmd()
        .args(["users", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("update"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_products_subcommands_exist() {
    storefront_cmd()
        .args(["products", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("delete")),
        );
}

// ── End-to-end against a mock upstream ──────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_users_list_against_mock() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "leanne@example.com" },
            { "id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "ervin@example.com" },
        ])))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        storefront_cmd()
            .args(["--directory-url", &uri, "--output", "json", "users", "list"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Leanne")
                    .and(predicate::str::contains("leanne@example.com")),
            );
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_users_list_table_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Leanne Graham", "username": "Bret", "email": "leanne@example.com" },
        ])))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        storefront_cmd()
            .args(["--directory-url", &uri, "users", "list"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Email").and(predicate::str::contains("Leanne Graham")),
            )
            .stderr(predicate::str::contains("Page 1 of 1"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_list_table_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 3,
                "title": "Gold Ring",
                "price": 168.0,
                "description": "18k",
                "category": "jewelery",
            },
        ])))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        storefront_cmd()
            .args(["--catalog-url", &uri, "products", "list"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Category").and(predicate::str::contains("Gold Ring")),
            );
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_get_not_found_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let output = storefront_cmd()
            .args(["--catalog-url", &uri, "products", "get", "99"])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(4), "not-found exit code");
        let text = combined_output(&output);
        assert!(text.contains("not found"), "got:\n{text}");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_delete_with_yes() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        storefront_cmd()
            .args(["--catalog-url", &uri, "--yes", "products", "delete", "2"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Product deleted successfully"));
    })
    .await
    .unwrap();
}
