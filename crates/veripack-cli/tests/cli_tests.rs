//! Integration tests for veripack-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use sha2::Digest;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn veripack_cmd() -> Command {
    cargo_bin_cmd!("veripack")
}

fn sha256_hex(content: &[u8]) -> String {
    hex_string(&sha2::Sha256::digest(content))
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

/// Creates `<root>/reports/checksums_SHA256.txt` with one line per entry.
fn write_manifest(root: &Path, entries: &[(&str, &[u8])]) {
    let reports = root.join("reports");
    fs::create_dir_all(&reports).unwrap();
    let lines: String = entries
        .iter()
        .map(|(path, content)| format!("{}  {}\n", sha256_hex(content), path))
        .collect();
    fs::write(reports.join("checksums_SHA256.txt"), lines).unwrap();
}

#[test]
fn test_version_flag() {
    veripack_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("veripack"));
}

#[test]
fn test_help_flag() {
    veripack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

/// Scenario: manifest and archive agree on every entry.
#[test]
fn test_matching_archive_passes() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "bundle.zip: 1 matched, 0 mismatched, 0 unlisted",
        ));
}

/// Scenario: the archive wraps everything in one top-level directory that
/// the manifest does not record.
#[test]
fn test_wrapping_prefix_is_reconciled() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("proj/data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 matched, 0 mismatched"));
}

/// Scenario: content differs from the manifest digest.
#[test]
fn test_mismatch_fails_with_exit_one() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"original")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"tampered")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[mismatch] data.csv"))
        .stdout(predicate::str::contains(sha256_hex(b"original")))
        .stdout(predicate::str::contains(sha256_hex(b"tampered")));
}

/// Scenario: empty manifest set; unlisted entries alone never fail the run.
#[test]
fn test_unlisted_only_passes() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"anything")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("[warn] unlisted entry: data.csv"))
        .stdout(predicate::str::contains("0 matched, 0 mismatched, 1 unlisted"));
}

/// Scenario: one missing archive and one fully matching archive; the
/// missing archive is reported but does not fail the run.
#[test]
fn test_missing_archive_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let good = temp.path().join("good.zip");
    write_zip(&good, &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(temp.path().join("absent.zip"))
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("[error] archive not found"))
        .stdout(predicate::str::contains("good.zip: 1 matched"));
}

/// Scenario: zero archives supplied and none found by the default scan.
#[test]
fn test_no_archives_is_a_vacuous_pass() {
    let temp = TempDir::new().unwrap();

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[note] no archives to verify"));
}

/// With no positional arguments, every *.zip in <root>/dist is verified.
#[test]
fn test_default_archive_directory_scan() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let dist = temp.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    write_zip(&dist.join("a.zip"), &[("data.csv", b"1,2,3\n")]);
    write_zip(&dist.join("b.zip"), &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("total: 2 archives, 2 matched"));
}

/// A positional pattern that reaches the binary unexpanded (quoted in a
/// shell) is expanded against the filesystem.
#[test]
fn test_positional_glob_pattern_is_expanded() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let dist = temp.path().join("dist");
    fs::create_dir_all(&dist).unwrap();
    write_zip(&dist.join("a.zip"), &[("data.csv", b"1,2,3\n")]);
    write_zip(&dist.join("b.zip"), &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(dist.join("*.zip"))
        .assert()
        .success()
        .stdout(predicate::str::contains("a.zip: 1 matched"))
        .stdout(predicate::str::contains("b.zip: 1 matched"))
        .stdout(predicate::str::contains("total: 2 archives, 2 matched"));
}

/// A pattern matching nothing is attempted verbatim and reported missing.
#[test]
fn test_unmatched_glob_pattern_reported_not_found() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg(temp.path().join("*.zip"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[error] archive not found"));
}

#[test]
fn test_verbose_prints_ok_lines() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--verbose")
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ok] data.csv"));
}

#[test]
fn test_quiet_still_reports_mismatches() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"original")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"tampered")]);

    veripack_cmd()
        .arg("--quiet")
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[mismatch]"))
        .stdout(predicate::str::contains("[summary]").not());
}

#[test]
fn test_json_output_structure() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"1,2,3\n")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(
        &archive,
        &[("data.csv", b"1,2,3\n"), ("extra.log", b"uncovered")],
    );

    let output = veripack_cmd()
        .arg("--json")
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["operation"], "verify");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["total_matched"], 1);
    assert_eq!(json["data"]["total_unlisted"], 1);
    assert_eq!(json["data"]["passed"], true);
    assert_eq!(json["data"]["archives"][0]["findings"][0]["kind"], "unlisted");
}

#[test]
fn test_json_output_mismatch_failure() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), &[("data.csv", b"original")]);
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"tampered")]);

    let output = veripack_cmd()
        .arg("--json")
        .arg("--root")
        .arg(temp.path())
        .arg(&archive)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "failure");
    assert_eq!(json["data"]["total_mismatched"], 1);
    assert_eq!(json["data"]["passed"], false);
}

#[test]
fn test_explicit_manifest_dir_override() {
    let temp = TempDir::new().unwrap();
    let manifests = temp.path().join("elsewhere");
    fs::create_dir_all(&manifests).unwrap();
    fs::write(
        manifests.join("checksums_SHA256.txt"),
        format!("{}  data.csv\n", sha256_hex(b"1,2,3\n")),
    )
    .unwrap();
    let archive = temp.path().join("bundle.zip");
    write_zip(&archive, &[("data.csv", b"1,2,3\n")]);

    veripack_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("--manifest-dir")
        .arg(&manifests)
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 matched, 0 mismatched"));
}
