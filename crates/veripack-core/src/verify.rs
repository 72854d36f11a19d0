//! Archive verification against a manifest set.

use std::path::Path;
use std::path::PathBuf;

use crate::archive;
use crate::digest;
use crate::error::VerifyError;
use crate::manifest::ManifestSet;
use crate::reconcile::lookup_candidates;
use crate::report::ArchiveReport;
use crate::report::Finding;
use crate::report::RunReport;

/// Verifies one archive against the manifest set.
///
/// Every regular-file entry is classified: `matched` when its streamed
/// SHA-256 digest equals the manifest digest found under the first lookup
/// candidate, `mismatched` when it differs, `unlisted` when no candidate is
/// present in the set. An archive that cannot be read at all yields the
/// sentinel zero-count report with the error attached; this never panics
/// and never aborts a batch.
///
/// An archive with no regular-file entries yields an all-zero report,
/// which is a pass: there is nothing to contradict the manifest.
#[must_use]
pub fn verify_archive(path: &Path, manifest: &ManifestSet) -> ArchiveReport {
    let mut report = ArchiveReport::new(path);

    let scanned = archive::scan_entries(path, |name, reader| {
        let actual = digest::sha256_hex(reader)?;
        let expected = lookup_candidates(name).find_map(|candidate| manifest.lookup(candidate));
        match expected {
            Some(expected) if expected == actual => {
                report.matched += 1;
                report.matched_entries.push(name.to_string());
            }
            Some(expected) => {
                report.mismatched += 1;
                report.findings.push(Finding::mismatch(name, expected, &actual));
            }
            None => {
                report.unlisted += 1;
                report.findings.push(Finding::unlisted(name));
            }
        }
        Ok(())
    });

    match scanned {
        Ok(()) => report,
        // A half-verified archive must not be reported as complete: reset
        // to the sentinel outcome and carry the error.
        Err(err) => ArchiveReport::failed(path, into_archive_error(path, err)),
    }
}

/// Verifies a batch of archives in input order, folding the per-archive
/// reports into a [`RunReport`]. Unreadable archives contribute zero
/// outcomes; the batch always runs to completion.
#[must_use]
pub fn verify_archives(paths: &[PathBuf], manifest: &ManifestSet) -> RunReport {
    RunReport {
        archives: paths
            .iter()
            .map(|path| verify_archive(path, manifest))
            .collect(),
    }
}

/// Entry-level read failures mean the container lied about its contents,
/// so they are folded into `ArchiveCorrupt` for that archive.
fn into_archive_error(path: &Path, err: VerifyError) -> VerifyError {
    match err {
        VerifyError::Io(io_err) => VerifyError::ArchiveCorrupt {
            path: path.to_path_buf(),
            reason: io_err.to_string(),
        },
        other => other,
    }
}
