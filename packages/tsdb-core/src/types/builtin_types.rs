use std::mem::{align_of, size_of};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::type_handle::TypeHandle;
use super::type_layout::TypeKind;
use super::type_registry::TypeRegistry;

/// Nanoseconds since the Unix epoch.
///
/// Stored with the `timestamp_ns` primitive, usually as the leading field of
/// a record.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimestampNs(pub u64);

impl TimestampNs {
    /// Current wall-clock time. Clocks set before the epoch read as zero.
    pub fn now() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        Self(nanos)
    }

    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> u64 {
        self.0
    }
}

/// Primitive descriptor: handle, name, kind, size, alignment.
type Primitive = (TypeHandle, &'static str, TypeKind, usize, usize);

/// Built-in primitives in registration order.
///
/// The position of each entry is its published handle.
pub const BUILTIN_PRIMITIVES: [Primitive; 12] = [
    (TypeHandle::U8, "u8", TypeKind::U8, size_of::<u8>(), align_of::<u8>()),
    (TypeHandle::U16, "u16", TypeKind::U16, size_of::<u16>(), align_of::<u16>()),
    (TypeHandle::U32, "u32", TypeKind::U32, size_of::<u32>(), align_of::<u32>()),
    (TypeHandle::U64, "u64", TypeKind::U64, size_of::<u64>(), align_of::<u64>()),
    (TypeHandle::I8, "i8", TypeKind::I8, size_of::<i8>(), align_of::<i8>()),
    (TypeHandle::I16, "i16", TypeKind::I16, size_of::<i16>(), align_of::<i16>()),
    (TypeHandle::I32, "i32", TypeKind::I32, size_of::<i32>(), align_of::<i32>()),
    (TypeHandle::I64, "i64", TypeKind::I64, size_of::<i64>(), align_of::<i64>()),
    (TypeHandle::F32, "f32", TypeKind::F32, size_of::<f32>(), align_of::<f32>()),
    (TypeHandle::F64, "f64", TypeKind::F64, size_of::<f64>(), align_of::<f64>()),
    (TypeHandle::BOOL, "bool", TypeKind::Bool, size_of::<bool>(), align_of::<bool>()),
    (
        TypeHandle::TIMESTAMP_NS,
        "timestamp_ns",
        TypeKind::TimestampNs,
        size_of::<TimestampNs>(),
        align_of::<TimestampNs>(),
    ),
];

/// Number of built-in primitive types.
pub const PRIMITIVE_COUNT: usize = BUILTIN_PRIMITIVES.len();

/// Registers all built-in primitives in their published order.
///
/// Must run on an empty registry.
pub(crate) fn register_builtin_types(registry: &mut TypeRegistry) {
    for (expected, name, kind, size, align) in BUILTIN_PRIMITIVES {
        let handle = registry.register_primitive(name, kind, size, align);
        debug_assert_eq!(handle, expected, "primitive '{name}' registered out of order");
    }
}
