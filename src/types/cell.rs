use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::is_false;

/// A cell's raw typed value.
///
/// The backing store reports text, numbers, booleans, or date-times
/// depending on the cell; blank cells read as `Empty`. Kept as a closed
/// variant so callers can match exhaustively instead of sniffing a dynamic
/// type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Literal text form used when writing this value into a cell.
    ///
    /// This is the single coercion point for non-text values, and it is
    /// lossy on purpose: numbers print in their shortest form, booleans
    /// become `TRUE`/`FALSE`, date-times use `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn to_literal(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(true) => "TRUE".to_string(),
            Self::Bool(false) => "FALSE".to_string(),
            Self::DateTime(t) => t.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Display text, as a header scan or a grid UI sees it.
    #[must_use]
    pub fn to_display(&self) -> String {
        self.to_literal()
    }

    /// True for the `Empty` variant only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The normalized unit of exchange between caller and grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    /// Raw typed value; not guaranteed to be text.
    #[serde(default)]
    pub value: CellValue,
    /// True iff the cell's row/column index fell inside the grid's frozen
    /// prefix when it was read.
    #[serde(default, skip_serializing_if = "is_false")]
    pub frozen: bool,
    /// Declared in the schema but never populated by any reader; reserved.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Free-text annotation attached to the cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Formula expression; when present and non-empty it wins over `value`
    /// on write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl CellRecord {
    /// Record holding just a value, all flags down.
    #[must_use]
    pub fn with_value(value: impl Into<CellValue>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Record holding just a formula.
    #[must_use]
    pub fn with_formula(formula: &str) -> Self {
        Self {
            formula: Some(formula.to_owned()),
            ..Self::default()
        }
    }
}
