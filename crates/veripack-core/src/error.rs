//! Error types for verification operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `VerifyError`.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Errors that can occur while verifying archives.
///
/// None of these abort a multi-archive run: archive-level errors are
/// recorded on the affected archive's report and processing continues
/// with the next archive.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested archive path does not exist.
    #[error("archive not found: {path}")]
    ArchiveNotFound {
        /// The missing archive path.
        path: PathBuf,
    },

    /// Archive exists but is not a readable zip container.
    #[error("invalid archive {path}: {reason}")]
    ArchiveCorrupt {
        /// The archive path.
        path: PathBuf,
        /// Description of the container failure.
        reason: String,
    },

    /// A manifest source exists but cannot be read.
    #[error("unreadable manifest: {path}")]
    ManifestUnreadable {
        /// The manifest source path.
        path: PathBuf,
    },
}

impl VerifyError {
    /// Returns `true` if this error concerns a whole archive rather than
    /// a single entry or manifest source.
    #[must_use]
    pub fn is_archive_error(&self) -> bool {
        matches!(
            self,
            Self::ArchiveNotFound { .. } | Self::ArchiveCorrupt { .. }
        )
    }
}
