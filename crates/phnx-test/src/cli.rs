//! CLI regression tests for the `phnx` binary.
//!
//! These tests invoke the binary as a subprocess to catch regressions in
//! flag names, exit codes, and output formats, which the Rust API tests
//! can't catch.
//!
//! Run with: `cargo test -p phnx-test`
//! Requires the `phnx` binary to be built first (`cargo build -p phnx`).

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Returns an assert_cmd Command wrapping the `phnx` binary.
fn phnx() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("phnx").expect("phnx binary not found; run `cargo build -p phnx` first")
}

/// Absolute path to the shared test fixtures directory.
fn fixtures() -> PathBuf {
    // CARGO_MANIFEST_DIR = .../crates/phnx-test
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates/")
        .parent()
        .expect("workspace root")
        .join("tests/fixtures")
}

const GENERATED_FILES: &[&str] = &[
    "types.ts",
    "client.ts",
    "hooks.ts",
    "schemas.ts",
    "adapters.ts",
];

// ---------------------------------------------------------------------------
// phnx generate
// ---------------------------------------------------------------------------

#[test]
fn generate_writes_all_files() {
    let out = TempDir::new().expect("tempdir");

    phnx()
        .args(["generate", "--input"])
        .arg(fixtures().join("petstore.yaml"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout(contains("wrote types.ts"))
        .stdout(contains("wrote client.ts"));

    for name in GENERATED_FILES {
        assert!(out.path().join(name).exists(), "missing {name}");
    }
}

#[test]
fn generate_client_contains_operation_method() {
    let out = TempDir::new().expect("tempdir");

    phnx()
        .args(["generate", "--input"])
        .arg(fixtures().join("petstore.yaml"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    let client = std::fs::read_to_string(out.path().join("client.ts")).expect("client.ts");
    assert!(client.contains("async listPets"));
}

#[test]
fn generate_defaults_to_generated_dir() {
    let cwd = TempDir::new().expect("tempdir");

    phnx()
        .current_dir(cwd.path())
        .args(["generate", "--input"])
        .arg(fixtures().join("minimal.json"))
        .assert()
        .success();

    assert!(cwd.path().join("generated/types.ts").exists());
}

#[test]
fn generate_missing_file_exits_one() {
    phnx()
        .args(["generate", "--input", "this-file-does-not-exist.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("not found"));
}

#[test]
fn generate_unparseable_spec_exits_one() {
    let out = TempDir::new().expect("tempdir");

    phnx()
        .args(["generate", "--input"])
        .arg(fixtures().join("invalid-parse-error.txt"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("generation failed"));
}

#[test]
fn generate_spec_without_paths_exits_one() {
    let out = TempDir::new().expect("tempdir");

    phnx()
        .args(["generate", "--input"])
        .arg(fixtures().join("missing-paths.json"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .failure()
        .code(1);
}

// ---------------------------------------------------------------------------
// phnx validate
// ---------------------------------------------------------------------------

#[test]
fn validate_valid_spec_exits_zero() {
    phnx()
        .args(["validate", "--input"])
        .arg(fixtures().join("minimal.json"))
        .assert()
        .success();
}

#[test]
fn validate_invalid_spec_exits_one() {
    phnx()
        .args(["validate", "--input"])
        .arg(fixtures().join("missing-paths.json"))
        .assert()
        .failure()
        .code(1);
}

#[test]
fn validate_unknown_format_exits_one() {
    phnx()
        .args(["validate", "--input"])
        .arg(fixtures().join("minimal.json"))
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("invalid format"));
}

#[test]
fn validate_json_format_outputs_valid_json() {
    let output = phnx()
        .args(["validate", "--input"])
        .arg(fixtures().join("minimal.json"))
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let s = String::from_utf8(output).expect("stdout should be valid UTF-8");
    let v: serde_json::Value =
        serde_json::from_str(&s).expect("--format json output should be valid JSON");
    assert_eq!(v.get("valid"), Some(&serde_json::Value::Bool(true)));
}
