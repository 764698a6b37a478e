//! Header indexing.
//!
//! Labels are the lowercased display text of the grid's first row (column
//! headers) and first column (row headers). They are rescanned from the
//! live grid on every call; nothing is cached, so the mapping always
//! reflects the sheet as it is right now.

use std::collections::HashMap;

use crate::backend::SheetBackend;
use crate::error::Result;
use crate::types::GridRange;

/// Lowercased column headers in sheet order, one per populated column.
///
/// Blank header cells come back as `""`.
/// E.g. `["project", "type", "4/8/2019"]`.
pub fn column_labels<B: SheetBackend>(sheet: &B) -> Result<Vec<String>> {
    let cols = sheet.column_count()?;
    if cols == 0 {
        return Ok(Vec::new());
    }
    let range = GridRange {
        row: 1,
        col: 1,
        num_rows: 1,
        num_cols: cols,
    };
    let first_row = sheet.read_display(&range)?.into_iter().next().unwrap_or_default();
    Ok(first_row.into_iter().map(|text| text.to_lowercase()).collect())
}

/// Lowercased row headers in sheet order, one per populated row.
///
/// E.g. `["project", "engineers", "run", "ooo"]`.
pub fn row_labels<B: SheetBackend>(sheet: &B) -> Result<Vec<String>> {
    let rows = sheet.row_count()?;
    if rows == 0 {
        return Ok(Vec::new());
    }
    let range = GridRange {
        row: 1,
        col: 1,
        num_rows: rows,
        num_cols: 1,
    };
    let first_col = sheet.read_display(&range)?;
    Ok(first_col
        .into_iter()
        .map(|row| row.into_iter().next().unwrap_or_default().to_lowercase())
        .collect())
}

/// Map of lowercased column header to 0-based column index.
///
/// Built by inserting left to right, so a duplicate label keeps the index
/// of its last occurrence. E.g. `{"project": 0, "type": 1}`.
pub fn column_label_index<B: SheetBackend>(sheet: &B) -> Result<HashMap<String, u32>> {
    Ok(index_by_label(column_labels(sheet)?))
}

/// Map of lowercased row header to 0-based row index.
///
/// E.g. `{"project": 0, "engineers": 1, "run": 2}`.
pub fn row_label_index<B: SheetBackend>(sheet: &B) -> Result<HashMap<String, u32>> {
    Ok(index_by_label(row_labels(sheet)?))
}

fn index_by_label(labels: Vec<String>) -> HashMap<String, u32> {
    let mut map = HashMap::with_capacity(labels.len());
    for (index, label) in (0u32..).zip(labels) {
        map.insert(label, index);
    }
    map
}
