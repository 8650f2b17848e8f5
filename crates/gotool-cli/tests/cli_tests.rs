//! CLI tests that invoke the compiled `asdf-go-install` binary.
//!
//! Everything here runs against a temporary data directory; commands that
//! would reach the package index are pointed at a closed local port.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HASH: &str = "919e61c0174b91303753ee3898569a01abb32c97";

const MANIFEST: &str = r#"{
  "manifestVersion": "v1",
  "manifestPayload": {
    "pluginName": "go-enum",
    "packageName": "github.com/abice/go-enum",
    "gitRepository": "https://github.com/abice/go-enum.git"
  }
}
"#;

fn bin(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("asdf-go-install").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("AGI_HTTP_TIMEOUT")
        .env("AGI_PKGSITE_URL", "http://127.0.0.1:9")
        .env("ASDF_DATA_DIR", data_dir);
    cmd
}

fn install(data_dir: &Path, plugin: &str, content: &str) {
    let dir = data_dir.join("plugins").join(plugin);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("manifest.json"), content).unwrap();
}

#[test]
fn test_help_exits_zero() {
    let temp = TempDir::new().unwrap();
    bin(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list-all"))
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();
    bin(temp.path()).arg("frobnicate").assert().code(2);
}

#[test]
fn test_show_prints_manifest_fields() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "go-enum", MANIFEST);

    bin(temp.path())
        .args(["show", "go-enum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com/abice/go-enum"))
        .stdout(predicate::str::contains("unresolved"));
}

#[test]
fn test_show_json() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "go-enum", MANIFEST);

    let output = bin(temp.path()).args(["show", "go-enum", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["manifestPayload"]["pluginName"], "go-enum");
}

#[test]
fn test_data_dir_flag_overrides_environment() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();
    install(flag_dir.path(), "go-enum", MANIFEST);

    bin(env_dir.path())
        .args(["show", "go-enum", "--data-dir"])
        .arg(flag_dir.path())
        .assert()
        .success();
}

#[test]
fn test_show_missing_manifest_is_not_found() {
    let temp = TempDir::new().unwrap();
    bin(temp.path())
        .args(["show", "go-enum"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_show_invalid_manifest() {
    let temp = TempDir::new().unwrap();
    install(
        temp.path(),
        "go-enum",
        r#"{"manifestVersion": "v1", "manifestPayload": {"pluginName": "go-enum"}}"#,
    );

    bin(temp.path())
        .args(["show", "go-enum"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("manifestPayload.packageName"))
        .stderr(predicate::str::contains("manifestPayload.gitRepository"));
}

#[test]
fn test_pin_then_show() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "go-enum", MANIFEST);

    bin(temp.path())
        .args(["pin", "go-enum", "v0.6.0", HASH])
        .assert()
        .success();

    bin(temp.path())
        .args(["show", "go-enum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v0.6.0"))
        .stdout(predicate::str::contains(HASH));
}

#[test]
fn test_pin_rejects_short_hash() {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "go-enum", MANIFEST);

    bin(temp.path())
        .args(["pin", "go-enum", "v0.6.0", "919e61c"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid argument"));

    let text = fs::read_to_string(temp.path().join("plugins/go-enum/manifest.json")).unwrap();
    assert_eq!(text, MANIFEST);
}

#[test]
fn test_unreachable_index_is_fetch_failure() {
    let temp = TempDir::new().unwrap();
    bin(temp.path())
        .args(["list-all", "github.com/abice/go-enum"])
        .assert()
        .code(5);
}

#[test]
fn test_invalid_timeout_setting() {
    let temp = TempDir::new().unwrap();
    bin(temp.path())
        .env("AGI_HTTP_TIMEOUT", "soon")
        .args(["show", "go-enum"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("AGI_HTTP_TIMEOUT"));
}

#[cfg(unix)]
#[test]
fn test_unrelated_non_utf8_variable_is_ignored() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let temp = TempDir::new().unwrap();
    bin(temp.path())
        .env("UNRELATED_VAR", OsString::from_vec(b"f\xffo".to_vec()))
        .args(["show", "go-enum"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("panicked").not());
}
