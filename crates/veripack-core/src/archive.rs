//! Zip archive entry enumeration.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::error::Result;
use crate::error::VerifyError;
use crate::manifest::normalize_path;

/// Visits every regular-file entry in the zip archive at `path`.
///
/// Directory entries are skipped. Entry names are normalized exactly like
/// manifest paths (leading `./` stripped, separators canonicalized) before
/// the visitor is called, and each entry's content is exposed as a
/// streaming reader.
///
/// # Errors
///
/// - [`VerifyError::ArchiveNotFound`] if `path` does not exist.
/// - [`VerifyError::ArchiveCorrupt`] if the file is not a readable zip
///   container or an entry record cannot be opened.
/// - Any error returned by the visitor.
pub fn scan_entries<F>(path: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&str, &mut dyn Read) -> Result<()>,
{
    if !path.is_file() {
        return Err(VerifyError::ArchiveNotFound {
            path: path.to_path_buf(),
        });
    }

    let corrupt = |reason: &dyn std::fmt::Display| VerifyError::ArchiveCorrupt {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|e| corrupt(&e))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| corrupt(&e))?;
        if entry.is_dir() {
            continue;
        }
        let name = normalize_path(entry.name());
        visit(&name, &mut entry)?;
    }
    Ok(())
}
