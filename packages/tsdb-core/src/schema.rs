//! Serializable description of the registered types.

use serde::{Deserialize, Serialize};

use crate::types::{TypeHandle, TypeKind, TypeRegistry};

/// Current snapshot format version.
pub const SCHEMA_VERSION: u32 = 1;

/// Snapshot of every registered type, primitives first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Snapshot format version
    pub version: u32,
    /// Types in handle order
    pub types: Vec<TypeSchema>,
}

/// One registered type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    pub handle: TypeHandle,
    pub name: String,
    pub kind: TypeKind,
    /// Size in bytes, trailing padding included
    pub size: usize,
    /// Alignment requirement in bytes
    pub align: usize,
    /// Struct fields; empty for primitives
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldSchema>,
}

/// One struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Field name
    pub name: String,
    /// Field type handle
    pub r#type: TypeHandle,
    /// Byte offset within the struct
    pub offset: u32,
}

impl SchemaSnapshot {
    pub fn from_registry(registry: &TypeRegistry) -> Self {
        let types = registry
            .iter()
            .map(|(handle, meta)| TypeSchema {
                handle,
                name: meta.name().to_string(),
                kind: meta.kind(),
                size: meta.size(),
                align: meta.alignment(),
                fields: meta
                    .fields()
                    .iter()
                    .map(|field| FieldSchema {
                        name: field.name.clone(),
                        r#type: field.ty,
                        offset: field.offset,
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: SCHEMA_VERSION,
            types,
        }
    }

    /// Returns the snapshot entry for `handle`.
    pub fn get(&self, handle: TypeHandle) -> Option<&TypeSchema> {
        self.types.get(handle.index())
    }
}
