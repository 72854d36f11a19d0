//! Verify command implementation.

use crate::cli::Cli;
use crate::output::OutputFormatter;
use anyhow::Result;
use anyhow::bail;
use globset::Glob;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use veripack_core::ManifestSet;
use veripack_core::VerifierConfig;
use veripack_core::verify_archives;

pub fn execute(cli: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    // Build config
    let mut config = VerifierConfig::new(&cli.root);
    if let Some(dir) = &cli.manifest_dir {
        config.manifest_dir.clone_from(dir);
    }
    if let Some(dir) = &cli.archive_dir {
        config.archive_dir.clone_from(dir);
    }

    // Load and merge manifest sources
    let manifest = ManifestSet::load(&config.manifest_dir, &config.manifest_prefix);
    for warning in manifest.warnings() {
        formatter.format_warning(warning);
    }
    if manifest.is_empty() {
        formatter.format_warning(&format!(
            "no manifest entries loaded from {}",
            config.manifest_dir.display()
        ));
    }

    // Resolve the archive batch
    let archives: Vec<PathBuf> = if cli.archives.is_empty() {
        config.default_archives()?
    } else {
        cli.archives.iter().flat_map(|arg| expand_pattern(arg)).collect()
    };
    if archives.is_empty() {
        formatter.format_note("no archives to verify")?;
        return Ok(());
    }

    // Verify and report
    let report = verify_archives(&archives, &manifest);
    formatter.format_run_report(&report)?;

    // Exit status policy: only content mismatches fail the run
    if report.passed() {
        Ok(())
    } else {
        bail!(
            "verification failed: {} mismatched entries",
            report.total_mismatched()
        )
    }
}

const GLOB_METACHARS: [char; 3] = ['*', '?', '['];

/// Expands a positional argument containing glob metacharacters against
/// the filesystem, so quoted patterns like `'dist/*.zip'` work without
/// shell expansion.
///
/// Matches are sorted for deterministic batch order. A pattern that
/// matches nothing (or that cannot be expanded, e.g. metacharacters in
/// its directory part) is attempted verbatim, so the run still reports it
/// as a missing archive.
fn expand_pattern(arg: &Path) -> Vec<PathBuf> {
    let text = arg.to_string_lossy();
    if !text.contains(GLOB_METACHARS) {
        return vec![arg.to_path_buf()];
    }
    let Ok(glob) = Glob::new(&text) else {
        return vec![arg.to_path_buf()];
    };
    let matcher = glob.compile_matcher();

    // Only the final path component is expanded; the directory part must
    // be concrete so there is a single directory to scan.
    let dir = arg.parent().unwrap_or_else(|| Path::new(""));
    if dir.to_string_lossy().contains(GLOB_METACHARS) {
        return vec![arg.to_path_buf()];
    }
    let scan_dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let Ok(entries) = fs::read_dir(scan_dir) else {
        return vec![arg.to_path_buf()];
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| {
            if dir.as_os_str().is_empty() {
                PathBuf::from(entry.file_name())
            } else {
                dir.join(entry.file_name())
            }
        })
        .filter(|path| matcher.is_match(path))
        .collect();
    matches.sort();

    if matches.is_empty() {
        vec![arg.to_path_buf()]
    } else {
        matches
    }
}
