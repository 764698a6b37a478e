//! Conversions between raw grid cells and [`CellRecord`]s.

use crate::types::{CellRecord, CellValue};

/// A single write against one cell, produced by [`encode`].
///
/// The formula/value instruction and the note instruction are independent;
/// one record can yield both.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteInstruction {
    /// Set the cell's formula from literal text.
    Formula(String),
    /// Set the cell's value from literal text.
    Value(String),
    /// Attach an annotation.
    Note(String),
}

/// Build a record from a cell's raw parts.
///
/// `frozen` and `hidden` start false; an empty comment or formula
/// normalizes to `None`.
#[must_use]
pub fn decode(value: CellValue, comment: &str, formula: &str) -> CellRecord {
    CellRecord {
        value,
        frozen: false,
        hidden: false,
        comment: if comment.is_empty() {
            None
        } else {
            Some(comment.to_owned())
        },
        formula: if formula.is_empty() {
            None
        } else {
            Some(formula.to_owned())
        },
    }
}

/// Flag the record frozen when its 0-based index falls inside the sheet's
/// frozen prefix. Applied once per cell at read time.
#[must_use]
pub fn mark_frozen_if_within(mut record: CellRecord, index: u32, frozen_count: u32) -> CellRecord {
    if index < frozen_count {
        record.frozen = true;
    }
    record
}

/// Lower a record into the write instructions that realize it.
///
/// A non-empty formula wins over the value; the value is only authoritative
/// when no formula exists. A non-empty comment adds an independent note
/// instruction.
#[must_use]
pub fn encode(record: &CellRecord) -> Vec<WriteInstruction> {
    let mut instructions = Vec::with_capacity(2);
    match record.formula.as_deref() {
        Some(formula) if !formula.is_empty() => {
            instructions.push(WriteInstruction::Formula(formula.to_owned()));
        }
        _ => instructions.push(WriteInstruction::Value(record.value.to_literal())),
    }
    if let Some(comment) = record.comment.as_deref() {
        if !comment.is_empty() {
            instructions.push(WriteInstruction::Note(comment.to_owned()));
        }
    }
    instructions
}
