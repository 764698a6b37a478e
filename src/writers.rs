//! Sparse label-driven writes and whole-sheet replacement.

use std::collections::HashMap;

use crate::backend::SheetBackend;
use crate::codec::{self, WriteInstruction};
use crate::error::{Result, SheetMapError};
use crate::headers;
use crate::types::{CellRecord, CellValue};

/// Write the labeled cells of `columns` into `row`.
///
/// Labels are resolved against the current column headers; entries whose
/// label has no match are dropped without error or warning. Matched cells
/// are written one at a time with no ordering or atomicity guarantee; a
/// backend failure partway through leaves the earlier cells written.
pub fn write_sparse_row<B: SheetBackend>(
    sheet: &mut B,
    row: u32,
    columns: &HashMap<String, CellRecord>,
) -> Result<()> {
    let index = headers::column_label_index(sheet)?;
    for (label, record) in columns {
        if let Some(&col) = index.get(label) {
            apply(sheet, row, col + 1, record)?;
        }
    }
    Ok(())
}

/// Write the labeled cells of `rows` into `col`.
///
/// Symmetric to [`write_sparse_row`], keyed by the row headers.
pub fn write_sparse_column<B: SheetBackend>(
    sheet: &mut B,
    col: u32,
    rows: &HashMap<String, CellRecord>,
) -> Result<()> {
    let index = headers::row_label_index(sheet)?;
    for (label, record) in rows {
        if let Some(&row) = index.get(label) {
            apply(sheet, row + 1, col, record)?;
        }
    }
    Ok(())
}

fn apply<B: SheetBackend>(sheet: &mut B, row: u32, col: u32, record: &CellRecord) -> Result<()> {
    for instruction in codec::encode(record) {
        match instruction {
            WriteInstruction::Formula(formula) => sheet.write_formula(row, col, &formula)?,
            WriteInstruction::Value(text) => sheet.write_value(row, col, &text)?,
            WriteInstruction::Note(note) => sheet.write_note(row, col, &note)?,
        }
    }
    Ok(())
}

/// Replace the whole sheet with `rows`, headers included.
///
/// The input shape is validated before anything is touched: empty input, an
/// empty first row, or ragged rows fail with [`SheetMapError::Shape`] and
/// leave the sheet unmodified. On success the sheet is cleared and `rows`
/// land as one `rows.len() x rows[0].len()` rectangle at (1, 1); the first
/// input row becomes the new header row by virtue of its position.
pub fn write_sheet_values<B: SheetBackend>(sheet: &mut B, rows: &[Vec<CellValue>]) -> Result<()> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if width == 0 {
        return Err(SheetMapError::Shape(
            "expected at least one row and one column".to_owned(),
        ));
    }
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(SheetMapError::Shape(format!(
            "row {} has {} columns, expected {width}",
            index + 1,
            row.len()
        )));
    }
    sheet.clear()?;
    sheet.write_values(1, 1, rows)
}
