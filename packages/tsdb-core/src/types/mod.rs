//! Type system: handles, primitive catalog, and runtime struct layout.

mod builtin_types;
mod error;
mod type_handle;
mod type_layout;
mod type_registry;

pub use builtin_types::{TimestampNs, BUILTIN_PRIMITIVES, PRIMITIVE_COUNT};
pub use error::TypeError;
pub use type_handle::TypeHandle;
pub use type_layout::{align_up, StructField, TypeKind, TypeMeta};
pub use type_registry::TypeRegistry;
