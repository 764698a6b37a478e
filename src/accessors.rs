//! Row and column accessors.
//!
//! Whole rows and columns materialized as label-keyed views. Every accessor
//! re-scans the headers first, then reads the target range's values and
//! formulas in one pass each, positionally aligned with the labels.

use std::collections::HashMap;

use crate::backend::SheetBackend;
use crate::codec;
use crate::error::Result;
use crate::headers;
use crate::types::{CellRecord, CellValue, ColumnView, GridRange, RowView};

/// Range covering all data in `row` (1-indexed), sized by the current
/// column count.
pub fn get_row_range<B: SheetBackend>(sheet: &B, row: u32) -> Result<GridRange> {
    Ok(GridRange {
        row,
        col: 1,
        num_rows: 1,
        num_cols: sheet.column_count()?,
    })
}

/// Range covering all data in `col` (1-indexed), sized by the current row
/// count.
pub fn get_column_range<B: SheetBackend>(sheet: &B, col: u32) -> Result<GridRange> {
    Ok(GridRange {
        row: 1,
        col,
        num_rows: sheet.row_count()?,
        num_cols: 1,
    })
}

/// Read `row` as a label-keyed view.
///
/// Keys are the column headers; a record whose column index falls inside
/// the frozen-column prefix comes back with `frozen` set. Out-of-range rows
/// fail with whatever the backend raises.
pub fn get_row<B: SheetBackend>(sheet: &B, row: u32) -> Result<RowView> {
    let labels = headers::column_labels(sheet)?;
    let frozen_cols = sheet.frozen_column_count()?;
    let range = get_row_range(sheet, row)?;
    let values = sheet.read_values(&range)?.into_iter().next().unwrap_or_default();
    let formulas = sheet.read_formulas(&range)?.into_iter().next().unwrap_or_default();

    Ok(RowView {
        sheet: sheet.name().to_owned(),
        row: i64::from(row),
        columns: build_records(labels, values, formulas, frozen_cols),
    })
}

/// Read `col` as a label-keyed view.
///
/// Symmetric to [`get_row`]: keys are the row headers and the frozen test
/// uses the frozen-row prefix.
pub fn get_column<B: SheetBackend>(sheet: &B, col: u32) -> Result<ColumnView> {
    let labels = headers::row_labels(sheet)?;
    let frozen_rows = sheet.frozen_row_count()?;
    let range = get_column_range(sheet, col)?;
    let values = sheet
        .read_values(&range)?
        .into_iter()
        .map(|line| line.into_iter().next().unwrap_or_default())
        .collect();
    let formulas = sheet
        .read_formulas(&range)?
        .into_iter()
        .map(|line| line.into_iter().next().unwrap_or_default())
        .collect();

    Ok(ColumnView {
        sheet: sheet.name().to_owned(),
        col: i64::from(col),
        rows: build_records(labels, values, formulas, frozen_rows),
    })
}

/// Resolve `label` against the current column headers and read that column.
///
/// An unknown label is not an error: the result is an empty view carrying
/// the `-1` column sentinel. Duplicate headers resolve to their last
/// occurrence, consistent with the sparse writers.
pub fn get_column_by_header<B: SheetBackend>(sheet: &B, label: &str) -> Result<ColumnView> {
    let index = headers::column_label_index(sheet)?;
    match index.get(label) {
        Some(&col) => get_column(sheet, col + 1),
        None => Ok(ColumnView::not_found(sheet.name())),
    }
}

fn build_records(
    labels: Vec<String>,
    values: Vec<CellValue>,
    formulas: Vec<String>,
    frozen_count: u32,
) -> HashMap<String, CellRecord> {
    let mut records = HashMap::with_capacity(labels.len());
    let mut values = values.into_iter();
    let mut formulas = formulas.into_iter();
    for (index, label) in (0u32..).zip(labels) {
        let value = values.next().unwrap_or_default();
        let formula = formulas.next().unwrap_or_default();
        let record = codec::decode(value, "", &formula);
        records.insert(label, codec::mark_frozen_if_within(record, index, frozen_count));
    }
    records
}
