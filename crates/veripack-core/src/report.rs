//! Verification outcome reporting types.

use std::path::Path;
use std::path::PathBuf;

use crate::error::VerifyError;

/// Kind of per-entry finding raised during verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// Entry has no manifest record under any lookup candidate.
    Unlisted,
    /// Entry content does not match its manifest digest.
    Mismatch {
        /// Digest recorded in the manifest.
        expected: String,
        /// Digest computed from the archive entry.
        actual: String,
    },
}

/// A per-entry problem found while verifying one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Normalized archive-entry path.
    pub entry: String,
    /// What was wrong with the entry.
    pub kind: FindingKind,
}

impl Finding {
    /// Creates an unlisted-entry finding.
    #[must_use]
    pub fn unlisted(entry: &str) -> Self {
        Self {
            entry: entry.to_string(),
            kind: FindingKind::Unlisted,
        }
    }

    /// Creates a digest-mismatch finding.
    #[must_use]
    pub fn mismatch(entry: &str, expected: &str, actual: &str) -> Self {
        Self {
            entry: entry.to_string(),
            kind: FindingKind::Mismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
        }
    }
}

/// Verification outcome for a single archive.
///
/// `matched + mismatched + unlisted` equals the number of non-directory
/// entries in the archive, except when `error` is set, in which case all
/// counts are zero (the sentinel outcome for an unreadable archive).
#[derive(Debug, Default)]
pub struct ArchiveReport {
    /// Path of the verified archive.
    pub archive: PathBuf,

    /// Entries whose digest matched the manifest.
    pub matched: usize,

    /// Entries whose digest differed from the manifest.
    pub mismatched: usize,

    /// Entries with no manifest record.
    pub unlisted: usize,

    /// Per-entry problems, in archive order.
    pub findings: Vec<Finding>,

    /// Names of matched entries, in archive order.
    pub matched_entries: Vec<String>,

    /// Archive-level failure, if the archive could not be read at all.
    pub error: Option<VerifyError>,
}

impl ArchiveReport {
    /// Creates an empty report for `archive`.
    #[must_use]
    pub fn new<P: AsRef<Path>>(archive: P) -> Self {
        Self {
            archive: archive.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Creates the sentinel zero-count report for an unreadable archive.
    #[must_use]
    pub fn failed<P: AsRef<Path>>(archive: P, error: VerifyError) -> Self {
        Self {
            archive: archive.as_ref().to_path_buf(),
            error: Some(error),
            ..Self::default()
        }
    }

    /// Total number of entries classified.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.matched + self.mismatched + self.unlisted
    }
}

/// Aggregate outcome of verifying a batch of archives, in input order.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-archive reports, ordered as the archives were supplied.
    pub archives: Vec<ArchiveReport>,
}

impl RunReport {
    /// Sum of matched entries across all archives.
    #[must_use]
    pub fn total_matched(&self) -> usize {
        self.archives.iter().map(|a| a.matched).sum()
    }

    /// Sum of mismatched entries across all archives.
    #[must_use]
    pub fn total_mismatched(&self) -> usize {
        self.archives.iter().map(|a| a.mismatched).sum()
    }

    /// Sum of unlisted entries across all archives.
    #[must_use]
    pub fn total_unlisted(&self) -> usize {
        self.archives.iter().map(|a| a.unlisted).sum()
    }

    /// Number of archives that could not be read at all.
    #[must_use]
    pub fn archive_errors(&self) -> usize {
        self.archives.iter().filter(|a| a.error.is_some()).count()
    }

    /// Overall verdict: the run passes unless any entry mismatched.
    ///
    /// Unreadable archives and unlisted entries are reported but do not by
    /// themselves fail the run; the policy is strict on content mismatch
    /// and permissive on partial coverage.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.total_mismatched() == 0
    }
}
