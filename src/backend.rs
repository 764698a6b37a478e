//! The seam between this crate and the grid store that owns the data.

use crate::error::Result;
use crate::types::{CellValue, GridRange};

/// One sheet of an external grid store.
///
/// The store owns and persists all state; implementations re-read live state
/// on every call, so two calls may observe different grids if the sheet
/// changes in between. Nothing at this seam retries, batches, or caches:
/// failures propagate unchanged, and a multi-cell write that dies midway
/// leaves the earlier cells written.
pub trait SheetBackend {
    /// Sheet name, used to stamp row and column views.
    fn name(&self) -> &str;

    /// Number of populated rows.
    fn row_count(&self) -> Result<u32>;

    /// Number of populated columns.
    fn column_count(&self) -> Result<u32>;

    /// Count of frozen leading rows.
    fn frozen_row_count(&self) -> Result<u32>;

    /// Count of frozen leading columns.
    fn frozen_column_count(&self) -> Result<u32>;

    /// Display text of every cell in `range`, row-major, `""` for blanks.
    fn read_display(&self, range: &GridRange) -> Result<Vec<Vec<String>>>;

    /// Raw typed value of every cell in `range`, row-major.
    fn read_values(&self, range: &GridRange) -> Result<Vec<Vec<CellValue>>>;

    /// Formula text of every cell in `range`, row-major, `""` where a cell
    /// holds no formula.
    fn read_formulas(&self, range: &GridRange) -> Result<Vec<Vec<String>>>;

    /// Set one cell from literal text.
    fn write_value(&mut self, row: u32, col: u32, text: &str) -> Result<()>;

    /// Set one cell's formula from literal text.
    fn write_formula(&mut self, row: u32, col: u32, formula: &str) -> Result<()>;

    /// Attach a free-text annotation to one cell.
    fn write_note(&mut self, row: u32, col: u32, note: &str) -> Result<()>;

    /// Rectangular write of typed values with the top-left corner at
    /// `(row, col)`.
    fn write_values(&mut self, row: u32, col: u32, values: &[Vec<CellValue>]) -> Result<()>;

    /// Remove every cell in the sheet.
    fn clear(&mut self) -> Result<()>;
}
