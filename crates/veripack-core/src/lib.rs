//! Archive integrity verification against SHA-256 checksum manifests.
//!
//! `veripack-core` verifies that every file stored inside a zip archive
//! matches the digest recorded for it in one or more checksum manifests.
//! Manifests may cover only part of an archive; entries without a manifest
//! record are reported as unlisted rather than failing the run. Only a
//! digest mismatch fails verification.
//!
//! # Examples
//!
//! ```no_run
//! use veripack_core::ManifestSet;
//! use veripack_core::VerifierConfig;
//! use veripack_core::verify_archives;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VerifierConfig::new(".");
//! let manifest = ManifestSet::load(&config.manifest_dir, &config.manifest_prefix);
//! let archives = config.default_archives()?;
//! let report = verify_archives(&archives, &manifest);
//! println!("{} entries matched", report.total_matched());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod reconcile;
pub mod report;
pub mod verify;

// Re-export main API types
pub use config::VerifierConfig;
pub use error::Result;
pub use error::VerifyError;
pub use manifest::ManifestLine;
pub use manifest::ManifestSet;
pub use report::ArchiveReport;
pub use report::Finding;
pub use report::FindingKind;
pub use report::RunReport;
pub use verify::verify_archive;
pub use verify::verify_archives;
