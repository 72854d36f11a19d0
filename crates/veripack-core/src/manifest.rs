//! Checksum manifest loading and line parsing.
//!
//! A manifest is a text file of `<64-hex digest><whitespace>[*]<path>`
//! records, the format written by `sha256sum` and compatible tools. Lines
//! that do not match (including `#` comments and blanks) are skipped, never
//! an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::error::VerifyError;

/// Result of parsing a single manifest line.
///
/// Malformed lines parse to `Skipped`; callers fold only over `Entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLine {
    /// A well-formed record: normalized relative path and lowercase digest.
    Entry {
        /// Normalized relative path.
        path: String,
        /// 64-character lowercase hex digest.
        digest: String,
    },
    /// Anything else: blank line, comment, malformed record.
    Skipped,
}

/// Mapping from normalized relative path to expected SHA-256 digest.
///
/// Built once per run by merging every manifest source; read-only
/// afterwards. When the same path appears in more than one source, the
/// later source (lexicographic filename order) wins.
#[derive(Debug, Clone, Default)]
pub struct ManifestSet {
    entries: BTreeMap<String, String>,
    sources: usize,
    warnings: Vec<String>,
}

impl ManifestSet {
    /// Loads and merges every manifest file in `dir` whose name starts
    /// with `prefix` and ends in `.txt`.
    ///
    /// A missing directory yields an empty set. An unreadable source file
    /// is skipped and recorded as a warning; it never fails the load.
    #[must_use]
    pub fn load(dir: &Path, prefix: &str) -> Self {
        let mut set = Self::default();
        let Ok(read_dir) = fs::read_dir(dir) else {
            return set;
        };

        let mut files: Vec<PathBuf> = read_dir
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_manifest_name(path, prefix))
            .collect();
        files.sort();

        for file in files {
            match fs::read_to_string(&file) {
                Ok(text) => {
                    set.sources += 1;
                    set.merge_lines(text.lines());
                }
                Err(_) => {
                    let err = VerifyError::ManifestUnreadable { path: file };
                    set.warnings.push(err.to_string());
                }
            }
        }
        set
    }

    /// Parses `lines` and inserts every well-formed record, overwriting
    /// existing paths (last wins).
    pub fn merge_lines<'a, I: IntoIterator<Item = &'a str>>(&mut self, lines: I) {
        for line in lines {
            if let ManifestLine::Entry { path, digest } = parse_line(line) {
                self.entries.insert(path, digest);
            }
        }
    }

    /// Returns the expected digest for a normalized path, if listed.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Number of distinct paths in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no paths are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of manifest source files that contributed entries.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources
    }

    /// Warnings collected while loading (unreadable sources).
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl FromIterator<(String, String)> for ManifestSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            sources: 0,
            warnings: Vec::new(),
        }
    }
}

/// Parses one manifest line into a [`ManifestLine`].
///
/// A record is `<64 hex chars><whitespace>[*]<path>`; the digest is
/// lowercased and the path normalized via [`normalize_path`]. The leading
/// `*` marks binary mode in `sha256sum` output and carries no meaning here.
#[must_use]
pub fn parse_line(line: &str) -> ManifestLine {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return ManifestLine::Skipped;
    }

    let Some((digest, rest)) = line.split_once(char::is_whitespace) else {
        return ManifestLine::Skipped;
    };
    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        return ManifestLine::Skipped;
    }

    let raw_path = rest.trim_start();
    let raw_path = raw_path.strip_prefix('*').unwrap_or(raw_path);
    let path = normalize_path(raw_path);
    if path.is_empty() {
        return ManifestLine::Skipped;
    }

    ManifestLine::Entry {
        path,
        digest: digest.to_ascii_lowercase(),
    }
}

/// Normalizes a relative path for manifest lookup: trims surrounding
/// whitespace, converts backslashes to forward slashes, and strips any
/// leading `./` components.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let mut path = raw.trim().replace('\\', "/");
    while let Some(rest) = path.strip_prefix("./") {
        path = rest.to_string();
    }
    path
}

fn is_manifest_name(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix) && name.ends_with(".txt"))
}
