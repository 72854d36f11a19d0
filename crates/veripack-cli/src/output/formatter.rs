//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use veripack_core::RunReport;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the full verification run: per-entry diagnostics, one summary
    /// line per archive, and the aggregate summary
    fn format_run_report(&self, report: &RunReport) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);

    /// Format an informational note (e.g. nothing to verify)
    fn format_note(&self, message: &str) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(operation: impl Into<String>, data: T, error: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Failure,
            data: Some(data),
            error: Some(error.into()),
        }
    }
}
