use super::type_handle::TypeHandle;

/// Error type for type registration and layout lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("Type handle {handle} is not registered ({registered} types known)")]
    InvalidHandle { handle: TypeHandle, registered: usize },

    #[error("Type '{name}' ({handle}) is not a struct")]
    NotAStruct { handle: TypeHandle, name: String },

    #[error("Type '{name}' has invalid alignment: {align}")]
    InvalidAlignment { name: String, align: usize },

    #[error("Struct '{name}' has no fields")]
    EmptyStruct { name: String },

    #[error("Struct '{name}' layout does not fit in 32-bit offsets")]
    LayoutOverflow { name: String },
}
