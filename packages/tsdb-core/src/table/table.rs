//! Structure-of-arrays storage for one struct type.
//!
//! Each table has:
//! - One column per struct field, in declaration order
//! - A row counter shared by all columns

use crate::error::StoreError;
use crate::types::{TypeHandle, TypeMeta, TypeRegistry};

use super::column::Column;

/// Columns of one registered struct type.
///
/// The layout itself stays in the registry; callers pass the struct's
/// [`TypeMeta`] into every row operation.
#[derive(Debug)]
pub struct Table {
    /// Struct type stored in this table
    handle: TypeHandle,
    /// One column per field
    columns: Vec<Column>,
    /// Rows inserted so far (equal to every column's row count)
    row_count: usize,
}

impl Table {
    /// Creates an empty table for the struct `handle`.
    ///
    /// # Arguments
    /// * `handle` - Struct type handle
    /// * `registry` - Registry holding the struct and its field types
    /// * `initial_rows` - Rows to reserve in each column
    pub fn create(
        handle: TypeHandle,
        registry: &TypeRegistry,
        initial_rows: usize,
    ) -> Result<Self, StoreError> {
        let columns = registry
            .fields_of(handle)?
            .iter()
            .map(|field| -> Result<Column, StoreError> {
                Column::new(registry.size_of(field.ty)?, initial_rows)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            handle,
            columns,
            row_count: 0,
        })
    }

    /// Fans one row out into the columns.
    ///
    /// # Arguments
    /// * `layout` - Layout of this table's struct
    /// * `source` - Row bytes, exactly `layout.size()` long
    pub fn insert_row(&mut self, layout: &TypeMeta, source: &[u8]) -> Result<(), StoreError> {
        self.check_row_len(layout, source.len())?;

        for (field, column) in layout.fields().iter().zip(self.columns.iter_mut()) {
            let start = field.offset();
            column.append(&source[start..start + column.element_size()], 1)?;
        }
        self.row_count += 1;

        tracing::trace!("Inserted row {} into table {}", self.row_count - 1, self.handle);
        Ok(())
    }

    /// Gathers row `row` from the columns into `dest`.
    ///
    /// Padding bytes of `dest` are left untouched.
    pub fn read_row(&self, layout: &TypeMeta, row: usize, dest: &mut [u8]) -> Result<(), StoreError> {
        if row >= self.row_count {
            return Err(StoreError::RowOutOfBounds {
                row,
                row_count: self.row_count,
            });
        }
        self.check_row_len(layout, dest.len())?;

        for (field, column) in layout.fields().iter().zip(self.columns.iter()) {
            let start = field.offset();
            let element = column.slice(row, row + 1)?;
            dest[start..start + element.len()].copy_from_slice(element);
        }
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn handle(&self) -> TypeHandle {
        self.handle
    }

    /// Returns the column of field `index`.
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Checks that `layout` fits the columns and the row is `layout.size()`.
    ///
    /// Every field must have one column and its element must end inside the
    /// row, so the slicing in `insert_row` and `read_row` stays in bounds.
    fn check_row_len(&self, layout: &TypeMeta, len: usize) -> Result<(), StoreError> {
        let fits = layout.fields().len() == self.columns.len()
            && layout
                .fields()
                .iter()
                .zip(&self.columns)
                .all(|(field, column)| {
                    field
                        .offset()
                        .checked_add(column.element_size())
                        .is_some_and(|end| end <= layout.size())
                });
        if !fits {
            return Err(StoreError::ColumnMismatch {
                handle: self.handle,
                type_name: layout.name().to_string(),
            });
        }

        if len != layout.size() {
            return Err(StoreError::RecordSizeMismatch {
                expected: layout.size(),
                got: len,
            });
        }
        Ok(())
    }
}
