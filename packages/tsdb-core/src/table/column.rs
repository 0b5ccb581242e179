//! Append-only column of fixed-size elements.

use crate::error::StoreError;

/// One field of one struct type across all rows.
///
/// Row `i` occupies bytes `[i * element_size, (i + 1) * element_size)`.
#[derive(Debug)]
pub struct Column {
    data: Vec<u8>,
    element_size: usize,
}

impl Column {
    /// Creates an empty column with room for `initial_rows` elements.
    ///
    /// Returns `Err(StoreError::CapacityOverflow)` if the reservation cannot
    /// be made.
    ///
    /// # Panics
    /// Panics if `element_size` is 0.
    pub fn new(element_size: usize, initial_rows: usize) -> Result<Self, StoreError> {
        assert!(element_size > 0, "element_size must be > 0");

        let overflow = || StoreError::CapacityOverflow {
            operation: "column reservation",
        };
        let capacity = initial_rows.checked_mul(element_size).ok_or_else(overflow)?;
        let mut data = Vec::new();
        data.try_reserve_exact(capacity).map_err(|_| overflow())?;

        Ok(Self { data, element_size })
    }

    /// Appends `element_count` elements read from the front of `source`.
    ///
    /// Bytes past `element_count * element_size` are ignored.
    pub fn append(&mut self, source: &[u8], element_count: usize) -> Result<(), StoreError> {
        let len = element_count
            .checked_mul(self.element_size)
            .ok_or(StoreError::CapacityOverflow {
                operation: "column append",
            })?;
        let bytes = source
            .get(..len)
            .ok_or(StoreError::RecordSizeMismatch {
                expected: len,
                got: source.len(),
            })?;

        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Returns the bytes of rows `[start_row, end_row)`.
    pub fn slice(&self, start_row: usize, end_row: usize) -> Result<&[u8], StoreError> {
        let out_of_bounds = || StoreError::SliceOutOfBounds {
            start: start_row,
            end: end_row,
            row_count: self.row_count(),
        };

        if start_row > end_row {
            return Err(out_of_bounds());
        }
        let start = start_row
            .checked_mul(self.element_size)
            .ok_or_else(out_of_bounds)?;
        let end = end_row
            .checked_mul(self.element_size)
            .ok_or_else(out_of_bounds)?;

        self.data.get(start..end).ok_or_else(out_of_bounds)
    }

    pub fn row_count(&self) -> usize {
        self.data.len() / self.element_size
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Total bytes stored.
    pub fn len_bytes(&self) -> usize {
        self.data.len()
    }
}
