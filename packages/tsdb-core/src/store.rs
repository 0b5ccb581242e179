//! Store facade owning the type registry and one table per struct type.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::record::{self, Record};
use crate::schema::SchemaSnapshot;
use crate::table::Table;
use crate::types::{TypeHandle, TypeRegistry};

/// Typed columnar store.
///
/// Types and rows are only ever added. A struct type moves from
/// registered-empty (no table) to populated on its first insert.
///
/// The store is single-owner and not synchronized; wrap it in a lock for
/// shared use.
#[derive(Debug)]
pub struct Store {
    /// Catalog of primitive and struct layouts
    registry: TypeRegistry,
    /// Tables for struct types that have received at least one insert
    tables: HashMap<TypeHandle, Table>,
    config: StoreConfig,
}

impl Store {
    /// Creates an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            registry: TypeRegistry::with_capacity(config.estimated_types),
            tables: HashMap::with_capacity(config.estimated_types),
            config,
        }
    }

    /// Returns the type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Registers a struct type. Does not create a table.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `fields` - `(field_name, field_type)` pairs in declaration order
    ///
    /// # Returns
    /// `Result<TypeHandle, StoreError>` with the new struct's handle.
    pub fn register_struct<S, N, I>(
        &mut self,
        name: S,
        fields: I,
    ) -> Result<TypeHandle, StoreError>
    where
        S: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (N, TypeHandle)>,
    {
        Ok(self.registry.register_struct(name, fields)?)
    }

    /// Appends one record to the table of struct `handle`.
    ///
    /// The table is created on the first insert for `handle`.
    ///
    /// # Arguments
    /// * `value` - Record whose `#[repr(C)]` layout matches the struct
    /// * `handle` - Struct type handle
    ///
    /// # Returns
    /// `Err(StoreError::LayoutMismatch)` if `R`'s size or alignment differs
    /// from the registered layout; nothing is inserted in that case.
    pub fn insert<R: Record>(&mut self, value: &R, handle: TypeHandle) -> Result<(), StoreError> {
        let layout = self.registry.struct_meta(handle)?;
        record::check_layout::<R>(handle, layout)?;

        let row = record::erase(value, layout.value_ranges());
        self.insert_bytes(handle, &row)
    }

    /// Appends one row given as raw bytes in the registered layout.
    ///
    /// `bytes` must be exactly the struct's size and every `bool` field byte,
    /// nested ones included, must be 0 or 1. A rejected row leaves the store
    /// unchanged.
    pub fn insert_bytes(&mut self, handle: TypeHandle, bytes: &[u8]) -> Result<(), StoreError> {
        let layout = self.registry.struct_meta(handle)?;

        if bytes.len() != layout.size() {
            return Err(StoreError::RecordSizeMismatch {
                expected: layout.size(),
                got: bytes.len(),
            });
        }
        for &offset in layout.bool_offsets() {
            let value = bytes[offset];
            if value > 1 {
                return Err(StoreError::InvalidBool { offset, value });
            }
        }

        let table = match self.tables.entry(handle) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::debug!(
                    "Creating table for '{}' ({}) with {} columns",
                    layout.name(),
                    handle,
                    layout.fields().len()
                );
                entry.insert(Table::create(handle, &self.registry, self.config.initial_rows)?)
            }
        };

        table.insert_row(layout, bytes)
    }

    /// Returns the first record stored under `handle`.
    ///
    /// A type with no rows yields the all-zero record rather than an error.
    pub fn query_first<R: Record>(&self, handle: TypeHandle) -> Result<R, StoreError> {
        let layout = self.registry.struct_meta(handle)?;
        record::check_layout::<R>(handle, layout)?;

        record::materialize(|dest| match self.tables.get(&handle) {
            Some(table) if table.row_count() > 0 => table.read_row(layout, 0, dest),
            _ => Ok(()),
        })
    }

    /// Returns the first row stored under `handle` as raw bytes.
    ///
    /// A type with no rows yields `size` zero bytes.
    pub fn query_first_bytes(&self, handle: TypeHandle) -> Result<Vec<u8>, StoreError> {
        let layout = self.registry.struct_meta(handle)?;
        let mut row = vec![0u8; layout.size()];

        if let Some(table) = self.tables.get(&handle) {
            if table.row_count() > 0 {
                table.read_row(layout, 0, &mut row)?;
            }
        }
        Ok(row)
    }

    /// Number of rows stored under struct `handle` (0 before the first insert).
    pub fn row_count(&self, handle: TypeHandle) -> Result<usize, StoreError> {
        self.registry.struct_meta(handle)?;
        Ok(self.tables.get(&handle).map_or(0, Table::row_count))
    }

    /// Number of struct types that have a table.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Returns a serializable description of every registered type.
    pub fn schema_snapshot(&self) -> SchemaSnapshot {
        SchemaSnapshot::from_registry(&self.registry)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
