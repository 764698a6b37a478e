//! In-memory sheet backend.
//!
//! The bundled reference implementation of [`SheetBackend`]: a sparse cell
//! store that behaves like a hosted grid (1-indexed addressing, bounds
//! failures on reads past the data extent, dimension growth on writes).
//! The test suite runs against it.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::backend::SheetBackend;
use crate::error::{Result, SheetMapError};
use crate::types::{CellValue, GridRange};

/// One stored cell: the typed value plus optional formula and note.
#[derive(Debug, Clone, Default)]
struct StoredCell {
    value: CellValue,
    formula: Option<String>,
    note: Option<String>,
}

/// An in-memory sheet.
///
/// Cells are stored sparsely, keyed by 1-indexed `(row, col)`; the data
/// extent grows as cells are written. Formulas are stored verbatim and never
/// evaluated. Frozen prefix counts are view state owned by the caller and
/// survive [`clear`](SheetBackend::clear).
#[derive(Debug, Default)]
pub struct MemorySheet {
    name: String,
    cells: BTreeMap<(u32, u32), StoredCell>,
    max_row: u32,
    max_col: u32,
    frozen_rows: u32,
    frozen_cols: u32,
}

impl MemorySheet {
    /// Empty sheet with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// Build a sheet from literal rows, top-left at (1, 1).
    ///
    /// Value types are detected from the text the same way
    /// [`write_value`](SheetBackend::write_value) detects them; blank
    /// strings leave the cell unpopulated.
    #[must_use]
    pub fn from_rows(name: &str, rows: Vec<Vec<&str>>) -> Self {
        let mut sheet = Self::new(name);
        let mut r = 1u32;
        for row in rows {
            let mut c = 1u32;
            for text in row {
                if !text.is_empty() {
                    sheet.cell_mut(r, c).value = detect_value(text);
                }
                c += 1;
            }
            r += 1;
        }
        sheet
    }

    /// Freeze the first `count` rows.
    pub fn set_frozen_rows(&mut self, count: u32) {
        self.frozen_rows = count;
    }

    /// Freeze the first `count` columns.
    pub fn set_frozen_cols(&mut self, count: u32) {
        self.frozen_cols = count;
    }

    /// Annotation attached to `(row, col)`, if any.
    #[must_use]
    pub fn note(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).and_then(|cell| cell.note.as_deref())
    }

    fn cell_mut(&mut self, row: u32, col: u32) -> &mut StoredCell {
        self.max_row = self.max_row.max(row);
        self.max_col = self.max_col.max(col);
        self.cells.entry((row, col)).or_default()
    }

    fn check_cell(&self, row: u32, col: u32) -> Result<()> {
        if row == 0 || col == 0 {
            return Err(SheetMapError::OutOfRange(format!(
                "cell ({row}, {col}) is not 1-indexed"
            )));
        }
        Ok(())
    }

    fn check_range(&self, range: &GridRange) -> Result<()> {
        self.check_cell(range.row, range.col)?;
        let last_row = range.row + range.num_rows - 1;
        let last_col = range.col + range.num_cols - 1;
        if last_row > self.max_row || last_col > self.max_col {
            return Err(SheetMapError::OutOfRange(format!(
                "range ending at ({last_row}, {last_col}) exceeds sheet extent ({}, {})",
                self.max_row, self.max_col
            )));
        }
        Ok(())
    }

    fn read_cells<T: Default>(
        &self,
        range: &GridRange,
        read: impl Fn(&StoredCell) -> T,
    ) -> Result<Vec<Vec<T>>> {
        if range.is_empty() {
            return Ok(Vec::new());
        }
        self.check_range(range)?;
        let mut out = Vec::with_capacity(range.num_rows as usize);
        for r in range.row..range.row + range.num_rows {
            let mut line = Vec::with_capacity(range.num_cols as usize);
            for c in range.col..range.col + range.num_cols {
                line.push(self.cells.get(&(r, c)).map(&read).unwrap_or_default());
            }
            out.push(line);
        }
        Ok(out)
    }
}

impl SheetBackend for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn row_count(&self) -> Result<u32> {
        Ok(self.max_row)
    }

    fn column_count(&self) -> Result<u32> {
        Ok(self.max_col)
    }

    fn frozen_row_count(&self) -> Result<u32> {
        Ok(self.frozen_rows)
    }

    fn frozen_column_count(&self) -> Result<u32> {
        Ok(self.frozen_cols)
    }

    fn read_display(&self, range: &GridRange) -> Result<Vec<Vec<String>>> {
        self.read_cells(range, |cell| cell.value.to_display())
    }

    fn read_values(&self, range: &GridRange) -> Result<Vec<Vec<CellValue>>> {
        self.read_cells(range, |cell| cell.value.clone())
    }

    fn read_formulas(&self, range: &GridRange) -> Result<Vec<Vec<String>>> {
        self.read_cells(range, |cell| cell.formula.clone().unwrap_or_default())
    }

    fn write_value(&mut self, row: u32, col: u32, text: &str) -> Result<()> {
        self.check_cell(row, col)?;
        let cell = self.cell_mut(row, col);
        cell.value = detect_value(text);
        // Writing a value clears any formula
        cell.formula = None;
        Ok(())
    }

    fn write_formula(&mut self, row: u32, col: u32, formula: &str) -> Result<()> {
        self.check_cell(row, col)?;
        let cell = self.cell_mut(row, col);
        cell.formula = if formula.is_empty() {
            None
        } else {
            Some(formula.to_owned())
        };
        // The store does not evaluate; the displayed value is gone until the
        // hosting grid recomputes it
        cell.value = CellValue::Empty;
        Ok(())
    }

    fn write_note(&mut self, row: u32, col: u32, note: &str) -> Result<()> {
        self.check_cell(row, col)?;
        let cell = self.cell_mut(row, col);
        cell.note = if note.is_empty() {
            None
        } else {
            Some(note.to_owned())
        };
        Ok(())
    }

    fn write_values(&mut self, row: u32, col: u32, values: &[Vec<CellValue>]) -> Result<()> {
        self.check_cell(row, col)?;
        let mut r = row;
        for line in values {
            let mut c = col;
            for value in line {
                if value.is_empty() {
                    self.cells.remove(&(r, c));
                } else {
                    let cell = self.cell_mut(r, c);
                    cell.value = value.clone();
                    cell.formula = None;
                }
                c += 1;
            }
            r += 1;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.cells.clear();
        self.max_row = 0;
        self.max_col = 0;
        Ok(())
    }
}

/// Detect the typed value of literal cell text the way a grid UI would:
/// booleans, then numbers, then date-times, falling back to text.
fn detect_value(text: &str) -> CellValue {
    if text.is_empty() {
        return CellValue::Empty;
    }
    if text.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if let Ok(n) = text.parse::<f64>() {
        return CellValue::Number(n);
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return CellValue::DateTime(t);
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return CellValue::DateTime(d.and_time(NaiveTime::MIN));
    }
    CellValue::Text(text.to_owned())
}
