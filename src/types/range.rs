use serde::{Deserialize, Serialize};

/// A rectangular grid range with its top-left corner at 1-indexed
/// `(row, col)`.
///
/// This is the backend-native range handle: the accessors hand one to every
/// [`SheetBackend`](crate::backend::SheetBackend) read, and callers that
/// need raw ranges get one from
/// [`get_row_range`](crate::accessors::get_row_range) /
/// [`get_column_range`](crate::accessors::get_column_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRange {
    pub row: u32,
    pub col: u32,
    pub num_rows: u32,
    pub num_cols: u32,
}

impl GridRange {
    /// Range covering a single cell.
    #[must_use]
    pub fn cell(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            num_rows: 1,
            num_cols: 1,
        }
    }

    /// True when the range covers no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0 || self.num_cols == 0
    }
}
