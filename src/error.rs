//! Structured error types for sheetmap.
//!
//! Nothing here is retried or logged; every failure surfaces synchronously
//! to the immediate caller.

/// All errors that can occur while reading or writing a sheet.
#[derive(Debug, thiserror::Error)]
pub enum SheetMapError {
    /// A row, column, or range index landed outside the grid. Raised by the
    /// backend itself; this layer does not pre-validate indices.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Bulk replace was handed empty or ragged input.
    #[error("bad grid shape: {0}")]
    Shape(String),

    /// Any other backend access failure (permission, quota, transport).
    #[error("backend: {0}")]
    Backend(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetMapError>;
