//! Verifier configuration.

use std::io;
use std::path::Path;
use std::path::PathBuf;

/// Default directory (relative to the root) holding checksum manifests.
pub const DEFAULT_MANIFEST_DIR: &str = "reports";

/// Default directory (relative to the root) scanned for archives.
pub const DEFAULT_ARCHIVE_DIR: &str = "dist";

/// Filename prefix identifying checksum manifest sources.
pub const DEFAULT_MANIFEST_PREFIX: &str = "checksums_SHA256";

/// Configuration for a verification run.
///
/// All paths are explicit; nothing is derived from the location of the
/// running binary. `new` fills in the conventional layout (`reports/` for
/// manifests, `dist/` for archives) relative to the given root, and the
/// fields are public so callers can override any of them.
///
/// # Examples
///
/// ```
/// use veripack_core::VerifierConfig;
///
/// let mut config = VerifierConfig::new("/srv/bundle");
/// config.archive_dir = "/srv/bundle/out".into();
/// assert!(config.manifest_dir.ends_with("reports"));
/// ```
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Repository root the default directories are derived from.
    pub root: PathBuf,

    /// Directory containing checksum manifest files.
    pub manifest_dir: PathBuf,

    /// Filename prefix selecting manifest files inside `manifest_dir`.
    pub manifest_prefix: String,

    /// Directory scanned for `*.zip` archives when none are given.
    pub archive_dir: PathBuf,
}

impl VerifierConfig {
    /// Creates a configuration with the conventional directory layout
    /// under `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        Self {
            manifest_dir: root.join(DEFAULT_MANIFEST_DIR),
            manifest_prefix: DEFAULT_MANIFEST_PREFIX.to_string(),
            archive_dir: root.join(DEFAULT_ARCHIVE_DIR),
            root,
        }
    }

    /// Returns every `*.zip` file in the archive directory, sorted by path.
    ///
    /// A missing archive directory yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn default_archives(&self) -> io::Result<Vec<PathBuf>> {
        if !self.archive_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut archives: Vec<PathBuf> = std::fs::read_dir(&self.archive_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_zip_extension(path))
            .collect();
        archives.sort();
        Ok(archives)
    }
}

fn has_zip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}
