//! Archive-entry to manifest-key reconciliation.
//!
//! Packaging tools sometimes wrap all archive content under a single
//! top-level directory (a project-name prefix) that the manifest does not
//! record. Reconciliation tolerates exactly that layout and nothing more:
//! the candidate list is the path itself, then the path with its first
//! segment removed. It is deliberately not extended further, to avoid
//! false-positive matches from over-aggressive stripping.

/// Returns the ordered manifest-lookup candidates for a normalized entry
/// path, most specific first. At most two candidates are produced.
///
/// # Examples
///
/// ```
/// use veripack_core::reconcile::lookup_candidates;
///
/// let candidates: Vec<&str> = lookup_candidates("proj/data.csv").collect();
/// assert_eq!(candidates, ["proj/data.csv", "data.csv"]);
///
/// let candidates: Vec<&str> = lookup_candidates("data.csv").collect();
/// assert_eq!(candidates, ["data.csv"]);
/// ```
pub fn lookup_candidates(path: &str) -> impl Iterator<Item = &str> {
    let stripped = path
        .split_once('/')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty());
    std::iter::once(path).chain(stripped)
}
