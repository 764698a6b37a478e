//! sheetmap - label-keyed access to grid-structured spreadsheets
//!
//! Reads and writes sheet data through header labels instead of raw
//! coordinates:
//! - Lowercased labels scanned from the first row / first column
//! - Whole rows and columns materialized as label-keyed records
//!   (value, formula, comment, frozen flag)
//! - Sparse writes that silently skip labels the sheet does not have
//! - Positional bulk replace for seeding a grid, headers included
//!
//! The grid itself lives behind the [`SheetBackend`] trait; [`MemorySheet`]
//! is the bundled in-memory implementation. Headers are re-scanned on every
//! call and nothing is cached, so views always reflect the live sheet.
//!
//! # Usage
//!
//! ```
//! use sheetmap::{get_row, MemorySheet};
//!
//! let sheet = MemorySheet::from_rows("roster", vec![
//!     vec!["Project", "Owner"],
//!     vec!["Atlas", "maria"],
//! ]);
//! let view = get_row(&sheet, 2)?;
//! assert_eq!(view.columns["project"].value.to_display(), "Atlas");
//! # Ok::<(), sheetmap::SheetMapError>(())
//! ```

pub mod accessors;
pub mod backend;
pub mod codec;
pub mod error;
pub mod headers;
pub mod memory;
pub mod types;
pub mod writers;

pub use accessors::{get_column, get_column_by_header, get_column_range, get_row, get_row_range};
pub use backend::SheetBackend;
pub use error::{Result, SheetMapError};
pub use memory::MemorySheet;
pub use types::*;
pub use writers::{write_sheet_values, write_sparse_column, write_sparse_row};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
