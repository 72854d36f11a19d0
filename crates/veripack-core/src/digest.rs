//! SHA-256 digest computation.
//!
//! The digest algorithm is part of the manifest format contract: manifests
//! record SHA-256 digests as lowercase hex, and changing the algorithm
//! would invalidate every existing manifest.

use sha2::Digest;
use sha2::Sha256;
use std::io;
use std::io::Read;

/// Computes the SHA-256 digest of everything `reader` yields, as a
/// lowercase hex string.
///
/// Content is streamed through the hasher, so large entries are never
/// buffered in full.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn sha256_hex<R: Read + ?Sized>(reader: &mut R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(reader, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Computes the SHA-256 digest of a byte slice, as a lowercase hex string.
#[must_use]
pub fn sha256_hex_bytes(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
