//! Integration tests for label-keyed row and column reads.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::{plan_sheet, status_sheet};
use sheetmap::{
    get_column, get_column_by_header, get_column_range, get_row, get_row_range, CellValue,
    MemorySheet, SheetBackend, SheetMapError,
};

// ============================================================================
// Row views
// ============================================================================

#[test]
fn row_view_keys_every_column_header() {
    let sheet = plan_sheet();
    let view = get_row(&sheet, 2).expect("row 2");

    assert_eq!(view.sheet, "plan");
    assert_eq!(view.row, 2);
    assert_eq!(view.columns.len(), 4);
    assert_eq!(view.columns["project"].value, CellValue::from("atlas"));
    assert_eq!(view.columns["type"].value, CellValue::from("infra"));
    assert_eq!(view.columns["4/8/2019"].value, CellValue::from("ok"));
}

#[test]
fn frozen_flag_covers_the_frozen_column_prefix() {
    let sheet = plan_sheet(); // 2 frozen columns
    let view = get_row(&sheet, 3).expect("row 3");

    assert!(view.columns["project"].frozen);
    assert!(view.columns["type"].frozen);
    assert!(!view.columns["4/8/2019"].frozen);
    assert!(!view.columns["4/15/2019"].frozen);
}

#[test]
fn readers_never_populate_hidden_or_comment() {
    let sheet = plan_sheet();
    let view = get_row(&sheet, 2).expect("row 2");

    for record in view.columns.values() {
        assert!(!record.hidden);
        assert_eq!(record.comment, None);
    }
}

#[test]
fn header_row_reads_as_its_own_labels() {
    let sheet = plan_sheet();
    let view = get_row(&sheet, 1).expect("row 1");

    assert_eq!(view.columns["project"].value, CellValue::from("Project"));
}

#[test]
fn blank_and_duplicate_headers_collapse_to_one_slot() {
    let sheet = MemorySheet::from_rows(
        "dups",
        vec![vec!["x", "", "x"], vec!["first", "mid", "last"]],
    );
    let view = get_row(&sheet, 2).expect("row 2");

    // Three headers, two distinct labels; last occurrence wins.
    assert_eq!(view.columns.len(), 2);
    assert_eq!(view.columns["x"].value, CellValue::from("last"));
    assert_eq!(view.columns[""].value, CellValue::from("mid"));
}

#[test]
fn row_read_past_extent_propagates_out_of_range() {
    let sheet = plan_sheet();
    assert!(matches!(
        get_row(&sheet, 99),
        Err(SheetMapError::OutOfRange(_))
    ));
}

#[test]
fn empty_sheet_yields_empty_view() {
    let sheet = MemorySheet::new("blank");
    let view = get_row(&sheet, 1).expect("row 1");
    assert!(view.columns.is_empty());
}

// ============================================================================
// Column views
// ============================================================================

#[test]
fn column_view_keys_every_row_header() {
    let sheet = status_sheet();
    let view = get_column(&sheet, 2).expect("col 2");

    assert_eq!(view.sheet, "status");
    assert_eq!(view.col, 2);
    assert_eq!(view.rows.len(), 4);
    assert_eq!(view.rows["project"].value, CellValue::from("w14"));
    assert_eq!(view.rows["engineers"].value, CellValue::Number(3.0));
    assert_eq!(view.rows["run"].value, CellValue::from("green"));
}

#[test]
fn frozen_flag_covers_the_frozen_row_prefix() {
    let sheet = status_sheet(); // 1 frozen row
    let view = get_column(&sheet, 2).expect("col 2");

    assert!(view.rows["project"].frozen);
    assert!(!view.rows["engineers"].frozen);
    assert!(!view.rows["ooo"].frozen);
}

#[test]
fn column_by_header_resolves_case_normalized_labels() {
    let sheet = plan_sheet();
    let view = get_column_by_header(&sheet, "type").expect("type column");

    assert_eq!(view.col, 2);
    assert_eq!(view.rows["atlas"].value, CellValue::from("infra"));
    assert_eq!(view.rows["borealis"].value, CellValue::from("app"));
}

#[test]
fn column_by_header_prefers_the_last_duplicate() {
    let sheet = MemorySheet::from_rows(
        "dups",
        vec![vec!["x", "y", "x"], vec!["a", "b", "c"]],
    );
    let view = get_column_by_header(&sheet, "x").expect("x column");
    assert_eq!(view.col, 3);
}

#[test]
fn column_by_header_miss_returns_sentinel_not_error() {
    let sheet = plan_sheet();
    let view = get_column_by_header(&sheet, "does-not-exist").expect("sentinel");

    assert_eq!(view.col, -1);
    assert!(view.rows.is_empty());
}

#[test]
fn not_found_sentinel_serializes_with_minus_one() {
    let sheet = plan_sheet();
    let view = get_column_by_header(&sheet, "nope").expect("sentinel");
    let json = serde_json::to_value(&view).expect("json");

    assert_eq!(json["col"], serde_json::json!(-1));
    assert_eq!(json["rows"], serde_json::json!({}));
}

// ============================================================================
// Raw range accessors
// ============================================================================

#[test]
fn row_range_spans_all_populated_columns() {
    let sheet = plan_sheet();
    let range = get_row_range(&sheet, 2).expect("range");

    assert_eq!(range.row, 2);
    assert_eq!(range.col, 1);
    assert_eq!(range.num_rows, 1);
    assert_eq!(range.num_cols, 4);
}

#[test]
fn column_range_spans_all_populated_rows() {
    let sheet = status_sheet();
    let range = get_column_range(&sheet, 2).expect("range");

    assert_eq!(range.row, 1);
    assert_eq!(range.col, 2);
    assert_eq!(range.num_rows, 4);
    assert_eq!(range.num_cols, 1);
}

#[test]
fn row_range_feeds_backend_reads_directly() {
    let sheet = plan_sheet();
    let range = get_row_range(&sheet, 3).expect("range");
    let display = sheet.read_display(&range).expect("display");

    assert_eq!(
        display,
        vec![vec![
            "borealis".to_owned(),
            "app".to_owned(),
            "at risk".to_owned(),
            "ok".to_owned(),
        ]]
    );
}

// ============================================================================
// Formula-bearing cells
// ============================================================================

#[test]
fn formula_cells_carry_their_formula_text() {
    let mut sheet = status_sheet();
    sheet.write_formula(2, 2, "=SUM(C2:C9)").expect("write");

    let view = get_column(&sheet, 2).expect("col 2");
    assert_eq!(
        view.rows["engineers"].formula.as_deref(),
        Some("=SUM(C2:C9)")
    );
    assert_eq!(view.rows["run"].formula, None);
}
