//! Integration tests for the dbx CLI.
//!
//! These run the built binary. Route commands are only exercised up to the
//! point where credentials are checked, so no network access is needed.

use assert_cmd::Command;
use predicates::prelude::*;

fn dbx_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dbx").unwrap();
    cmd.env_remove("DROPBOX_ACCESS_TOKEN")
        .env_remove("DROPBOX_API_URL")
        .env_remove("DROPBOX_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    dbx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("copy-ref"))
        .stdout(predicate::str::contains("metadata"))
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn cli_shows_version() {
    dbx_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dbx 0.1.0"));
}

#[test]
fn cli_prints_copy_reference_taxonomy() {
    dbx_cmd()
        .args(["errors", "copy-reference-get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CopyReferenceGetError"))
        .stdout(predicate::str::contains("path -> LookupError"));
}

#[test]
fn cli_prints_get_metadata_taxonomy() {
    dbx_cmd()
        .args(["errors", "get-metadata"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GetMetadataError"))
        .stdout(predicate::str::contains("path -> LookupError"));
}

#[test]
fn cli_rejects_unknown_taxonomy() {
    dbx_cmd()
        .args(["errors", "list-folder"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn cli_copy_ref_requires_token() {
    dbx_cmd()
        .args(["copy-ref", "/a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DROPBOX_ACCESS_TOKEN"));
}

#[test]
fn cli_rejects_bad_timeout() {
    dbx_cmd()
        .args(["metadata", "/a.txt"])
        .env("DROPBOX_ACCESS_TOKEN", "sl.test")
        .env("DROPBOX_TIMEOUT_SECS", "soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DROPBOX_TIMEOUT_SECS"));
}
