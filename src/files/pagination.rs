//! # Pagination
//!
//! Deterministic, stateless page slicing: fixed windows of twenty over
//! whatever order the metadata store returns. No cursors - callers
//! re-request by page index, and boundaries are only stable while the
//! collection is not mutated underneath them.

/// Records per page
pub const PAGE_SIZE: usize = 20;

/// Normalize caller-supplied page input
///
/// Anything that does not parse as a non-negative integer is page zero.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

/// Skip/limit window for a zero-based page
pub fn page_bounds(page: u64) -> (usize, usize) {
    (page as usize * PAGE_SIZE, PAGE_SIZE)
}
