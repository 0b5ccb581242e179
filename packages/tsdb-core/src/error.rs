//! Store error types.

use thiserror::Error;

use crate::types::{TypeError, TypeHandle};

/// Store operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Registry lookup or registration failure
    #[error(transparent)]
    Type(#[from] TypeError),

    /// Record type does not match the registered struct layout
    #[error(
        "Record layout mismatch for '{type_name}' ({handle}): registered size={expected_size} align={expected_align}, got size={got_size} align={got_align}"
    )]
    LayoutMismatch {
        handle: TypeHandle,
        type_name: String,
        expected_size: usize,
        expected_align: usize,
        got_size: usize,
        got_align: usize,
    },

    /// Row bytes do not have the registered struct size
    #[error("Record size mismatch: expected {expected} bytes, got {got}")]
    RecordSizeMismatch { expected: usize, got: usize },

    /// Row bytes hold a `bool` field byte other than 0 or 1
    #[error("Invalid bool byte {value:#04x} at offset {offset}")]
    InvalidBool { offset: usize, value: u8 },

    /// Layout passed to a table does not match the table's columns
    #[error("Layout '{type_name}' does not match the columns of table {handle}")]
    ColumnMismatch {
        handle: TypeHandle,
        type_name: String,
    },

    /// Row index past the end of a table
    #[error("Row {row} out of bounds (row count: {row_count})")]
    RowOutOfBounds { row: usize, row_count: usize },

    /// Column slice past the end of the column
    #[error("Slice [{start}, {end}) out of bounds (row count: {row_count})")]
    SliceOutOfBounds {
        start: usize,
        end: usize,
        row_count: usize,
    },

    /// Capacity calculation overflow
    #[error("Capacity overflow during {operation}")]
    CapacityOverflow { operation: &'static str },
}
