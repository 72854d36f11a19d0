//! Human-readable output formatter with tagged diagnostic lines.
//!
//! Every line is prefixed with its category tag (`[error]`, `[warn]`,
//! `[mismatch]`, `[summary]`, `[note]`, `[ok]`) so the output stays
//! grep-able in CI logs even with colors disabled.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use veripack_core::ArchiveReport;
use veripack_core::FindingKind;
use veripack_core::RunReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn tag(&self, name: &str) -> String {
        if self.use_colors {
            let styled = match name {
                "error" | "mismatch" => style(format!("[{name}]")).red().bold(),
                "warn" => style(format!("[{name}]")).yellow().bold(),
                "ok" => style(format!("[{name}]")).green(),
                _ => style(format!("[{name}]")).cyan(),
            };
            styled.to_string()
        } else {
            format!("[{name}]")
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    fn archive_label(report: &ArchiveReport) -> String {
        report
            .archive
            .file_name()
            .map_or_else(|| report.archive.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            })
    }

    fn format_archive(&self, report: &ArchiveReport) {
        let label = Self::archive_label(report);

        if let Some(err) = &report.error {
            self.line(&format!("{} {err}", self.tag("error")));
        }

        if self.verbose && !self.quiet {
            for entry in &report.matched_entries {
                self.line(&format!("{} {entry}", self.tag("ok")));
            }
        }

        for finding in &report.findings {
            match &finding.kind {
                FindingKind::Unlisted => {
                    if !self.quiet {
                        self.line(&format!(
                            "{} unlisted entry: {}",
                            self.tag("warn"),
                            finding.entry
                        ));
                    }
                }
                FindingKind::Mismatch { expected, actual } => {
                    self.line(&format!(
                        "{} {}: expected {expected}, got {actual}",
                        self.tag("mismatch"),
                        finding.entry
                    ));
                }
            }
        }

        if !self.quiet {
            self.line(&format!(
                "{} {label}: {} matched, {} mismatched, {} unlisted",
                self.tag("summary"),
                report.matched,
                report.mismatched,
                report.unlisted
            ));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_run_report(&self, report: &RunReport) -> Result<()> {
        for archive in &report.archives {
            self.format_archive(archive);
        }

        if !self.quiet {
            let verdict = if report.passed() { "PASSED" } else { "FAILED" };
            let verdict = if self.use_colors {
                if report.passed() {
                    style(verdict).green().bold().to_string()
                } else {
                    style(verdict).red().bold().to_string()
                }
            } else {
                verdict.to_string()
            };
            self.line(&format!(
                "{} total: {} archives, {} matched, {} mismatched, {} unlisted, {} unreadable - {verdict}",
                self.tag("summary"),
                report.archives.len(),
                report.total_matched(),
                report.total_mismatched(),
                report.total_unlisted(),
                report.archive_errors(),
            ));
        }
        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line(&format!("{} {message}", self.tag("warn")));
    }

    fn format_note(&self, message: &str) -> Result<()> {
        if !self.quiet {
            self.line(&format!("{} {message}", self.tag("note")));
        }
        Ok(())
    }
}
