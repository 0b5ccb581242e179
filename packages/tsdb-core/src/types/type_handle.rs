use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a registered type.
///
/// A handle is the index of its type in the registry. Handles are never
/// reused or invalidated because the registry only grows.
///
/// The primitive types are always registered first, in the order of the
/// associated constants below. Callers may rely on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeHandle(u32);

impl TypeHandle {
    pub const U8: TypeHandle = TypeHandle(0);
    pub const U16: TypeHandle = TypeHandle(1);
    pub const U32: TypeHandle = TypeHandle(2);
    pub const U64: TypeHandle = TypeHandle(3);
    pub const I8: TypeHandle = TypeHandle(4);
    pub const I16: TypeHandle = TypeHandle(5);
    pub const I32: TypeHandle = TypeHandle(6);
    pub const I64: TypeHandle = TypeHandle(7);
    pub const F32: TypeHandle = TypeHandle(8);
    pub const F64: TypeHandle = TypeHandle(9);
    pub const BOOL: TypeHandle = TypeHandle(10);
    pub const TIMESTAMP_NS: TypeHandle = TypeHandle(11);

    pub(crate) const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Returns the registry index this handle names.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw handle value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
