//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use veripack_core::ArchiveReport;
use veripack_core::FindingKind;
use veripack_core::RunReport;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct FindingOutput {
    entry: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual: Option<String>,
}

#[derive(Serialize)]
struct ArchiveOutput {
    archive: String,
    matched: usize,
    mismatched: usize,
    unlisted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    findings: Vec<FindingOutput>,
}

#[derive(Serialize)]
struct RunOutput {
    archives: Vec<ArchiveOutput>,
    total_matched: usize,
    total_mismatched: usize,
    total_unlisted: usize,
    archive_errors: usize,
    passed: bool,
}

fn archive_output(report: &ArchiveReport) -> ArchiveOutput {
    let findings = report
        .findings
        .iter()
        .map(|finding| match &finding.kind {
            FindingKind::Unlisted => FindingOutput {
                entry: finding.entry.clone(),
                kind: "unlisted",
                expected: None,
                actual: None,
            },
            FindingKind::Mismatch { expected, actual } => FindingOutput {
                entry: finding.entry.clone(),
                kind: "mismatch",
                expected: Some(expected.clone()),
                actual: Some(actual.clone()),
            },
        })
        .collect();

    ArchiveOutput {
        archive: report.archive.display().to_string(),
        matched: report.matched,
        mismatched: report.mismatched,
        unlisted: report.unlisted,
        error: report.error.as_ref().map(ToString::to_string),
        findings,
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_run_report(&self, report: &RunReport) -> Result<()> {
        let data = RunOutput {
            archives: report.archives.iter().map(archive_output).collect(),
            total_matched: report.total_matched(),
            total_mismatched: report.total_mismatched(),
            total_unlisted: report.total_unlisted(),
            archive_errors: report.archive_errors(),
            passed: report.passed(),
        };

        let output = if report.passed() {
            JsonOutput::success("verify", data)
        } else {
            let message = format!("{} mismatched entries", report.total_mismatched());
            JsonOutput::failure("verify", data, message)
        };
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }

    fn format_note(&self, message: &str) -> Result<()> {
        #[derive(Serialize)]
        struct NoteData {
            message: String,
        }

        let output = JsonOutput::success(
            "note",
            NoteData {
                message: message.to_string(),
            },
        );
        Self::output(&output)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use veripack_core::Finding;

    #[test]
    fn test_archive_output_carries_findings() {
        let report = ArchiveReport {
            matched: 1,
            mismatched: 1,
            unlisted: 1,
            findings: vec![
                Finding::unlisted("extra.log"),
                Finding::mismatch("data.csv", "aa", "bb"),
            ],
            matched_entries: vec!["ok.txt".to_string()],
            error: None,
            archive: PathBuf::from("dist/bundle.zip"),
        };

        let out = archive_output(&report);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["archive"], "dist/bundle.zip");
        assert_eq!(json["findings"][0]["kind"], "unlisted");
        assert_eq!(json["findings"][1]["expected"], "aa");
        assert!(json["findings"][0].get("expected").is_none());
    }
}
