use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::CellRecord;

/// Label-keyed snapshot of one row.
///
/// Contains exactly one entry per column header; duplicate or empty headers
/// collapse to one map slot, last one wins. Constructed fresh on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    /// Originating sheet name.
    pub sheet: String,
    /// 1-indexed row the snapshot was read from.
    pub row: i64,
    pub columns: HashMap<String, CellRecord>,
}

/// Label-keyed snapshot of one column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    /// Originating sheet name.
    pub sheet: String,
    /// 1-indexed column, or `-1` when a header lookup found nothing.
    pub col: i64,
    pub rows: HashMap<String, CellRecord>,
}

impl ColumnView {
    /// The deliberate "header not found" value object: `col` is `-1` and the
    /// row map is empty.
    #[must_use]
    pub fn not_found(sheet: &str) -> Self {
        Self {
            sheet: sheet.to_owned(),
            col: -1,
            rows: HashMap::new(),
        }
    }
}
