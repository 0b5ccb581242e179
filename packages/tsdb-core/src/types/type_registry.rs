use super::builtin_types::{register_builtin_types, PRIMITIVE_COUNT};
use super::error::TypeError;
use super::type_handle::TypeHandle;
use super::type_layout::{layout_struct, StructField, TypeKind, TypeMeta};

/// Registry of primitive and struct type layouts.
///
/// Primitives occupy the first handles in the order published on
/// [`TypeHandle`]. Structs are appended in registration order. Entries are
/// never removed or modified, so handles stay valid for the registry's
/// lifetime.
#[derive(Debug)]
pub struct TypeRegistry {
    types: Vec<TypeMeta>,
}

impl TypeRegistry {
    /// Creates a registry holding only the built-in primitives.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a registry with room for `estimated_types` structs.
    pub fn with_capacity(estimated_types: usize) -> Self {
        let mut registry = Self {
            types: Vec::with_capacity(PRIMITIVE_COUNT + estimated_types),
        };
        register_builtin_types(&mut registry);
        registry
    }

    pub(crate) fn register_primitive(
        &mut self,
        name: &str,
        kind: TypeKind,
        size: usize,
        alignment: usize,
    ) -> TypeHandle {
        let handle = self.next_handle();
        self.types.push(TypeMeta::primitive(name, kind, size, alignment));
        handle
    }

    /// Registers a struct built from already registered field types.
    ///
    /// Each call mints a new handle, even for a field list identical to an
    /// earlier registration.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `fields` - `(field_name, field_type)` pairs in declaration order
    ///
    /// # Returns
    /// The new struct's handle, or `Err(TypeError)` if a field type is not
    /// registered or the layout does not fit.
    pub fn register_struct<S, N, I>(&mut self, name: S, fields: I) -> Result<TypeHandle, TypeError>
    where
        S: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (N, TypeHandle)>,
    {
        let name = name.into();
        let mut members = Vec::new();
        for (field_name, ty) in fields {
            members.push((field_name.into(), ty, self.meta_of(ty)?));
        }

        let meta = layout_struct(name, members)?;
        let handle = self.next_handle();

        tracing::debug!(
            "Registered struct '{}' as {} (size={}, align={}, fields={})",
            meta.name(),
            handle,
            meta.size(),
            meta.alignment(),
            meta.fields().len()
        );

        self.types.push(meta);
        Ok(handle)
    }

    /// Returns the layout registered under `handle`.
    pub fn meta_of(&self, handle: TypeHandle) -> Result<&TypeMeta, TypeError> {
        self.types
            .get(handle.index())
            .ok_or(TypeError::InvalidHandle {
                handle,
                registered: self.types.len(),
            })
    }

    pub fn kind_of(&self, handle: TypeHandle) -> Result<TypeKind, TypeError> {
        self.meta_of(handle).map(TypeMeta::kind)
    }

    pub fn size_of(&self, handle: TypeHandle) -> Result<usize, TypeError> {
        self.meta_of(handle).map(TypeMeta::size)
    }

    pub fn align_of(&self, handle: TypeHandle) -> Result<usize, TypeError> {
        self.meta_of(handle).map(TypeMeta::alignment)
    }

    /// Returns the fields of a struct type.
    ///
    /// Fails with [`TypeError::NotAStruct`] for primitive handles.
    pub fn fields_of(&self, handle: TypeHandle) -> Result<&[StructField], TypeError> {
        self.struct_meta(handle).map(TypeMeta::fields)
    }

    /// Returns the layout of a struct type, rejecting primitives.
    pub fn struct_meta(&self, handle: TypeHandle) -> Result<&TypeMeta, TypeError> {
        let meta = self.meta_of(handle)?;
        if !meta.is_struct() {
            return Err(TypeError::NotAStruct {
                handle,
                name: meta.name().to_string(),
            });
        }
        Ok(meta)
    }

    /// Returns `true` if `handle` names a registered type.
    pub fn contains(&self, handle: TypeHandle) -> bool {
        handle.index() < self.types.len()
    }

    /// Number of registered types, primitives included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always `false`: the primitives are registered on construction.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over every registered type in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeHandle, &TypeMeta)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, meta)| (TypeHandle::from_index(index as u32), meta))
    }

    fn next_handle(&self) -> TypeHandle {
        TypeHandle::from_index(self.types.len() as u32)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
