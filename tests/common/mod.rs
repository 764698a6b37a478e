//! Shared fixtures for sheetmap integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use sheetmap::{CellRecord, MemorySheet};

/// Sprint-plan style sheet: column headers in row 1, two frozen columns.
///
/// ```text
/// | Project  | Type  | 4/8/2019 | 4/15/2019 |
/// | atlas    | infra | ok       | ok        |
/// | borealis | app   | at risk  | ok        |
/// ```
pub fn plan_sheet() -> MemorySheet {
    let mut sheet = MemorySheet::from_rows(
        "plan",
        vec![
            vec!["Project", "Type", "4/8/2019", "4/15/2019"],
            vec!["atlas", "infra", "ok", "ok"],
            vec!["borealis", "app", "at risk", "ok"],
        ],
    );
    sheet.set_frozen_cols(2);
    sheet
}

/// Status sheet keyed by row headers in column 1, one frozen row.
///
/// ```text
/// | Project   | w14   |
/// | Engineers | 3     |
/// | Run       | green |
/// | OOO       | 1     |
/// ```
pub fn status_sheet() -> MemorySheet {
    let mut sheet = MemorySheet::from_rows(
        "status",
        vec![
            vec!["Project", "w14"],
            vec!["Engineers", "3"],
            vec!["Run", "green"],
            vec!["OOO", "1"],
        ],
    );
    sheet.set_frozen_rows(1);
    sheet
}

/// Single-entry record map for sparse writes.
pub fn one_record(label: &str, record: CellRecord) -> HashMap<String, CellRecord> {
    HashMap::from([(label.to_owned(), record)])
}

/// Record holding just literal text.
pub fn text_record(text: &str) -> CellRecord {
    CellRecord::with_value(text)
}
