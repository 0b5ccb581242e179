use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::error::TypeError;
use super::type_handle::TypeHandle;

/// Closed set of type shapes known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    TimestampNs,
    Struct,
}

impl TypeKind {
    /// Returns `true` for every kind except [`TypeKind::Struct`].
    pub fn is_primitive(self) -> bool {
        !matches!(self, TypeKind::Struct)
    }
}

/// One field of a registered struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    /// Field name (documentary only)
    pub name: String,
    /// Field type
    pub ty: TypeHandle,
    /// Byte offset within the struct
    pub offset: u32,
}

impl StructField {
    /// Returns the field offset as a byte index.
    pub fn offset(&self) -> usize {
        self.offset as usize
    }
}

/// Layout and metadata for one registered type.
///
/// Size includes trailing padding so that arrays of the type stay aligned.
/// Struct layouts are computed once at registration and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMeta {
    name: String,
    kind: TypeKind,
    size: usize,
    alignment: usize,
    fields: Vec<StructField>,
    value_ranges: Vec<Range<usize>>,
    bool_offsets: Vec<usize>,
}

impl TypeMeta {
    pub(crate) fn primitive(name: &str, kind: TypeKind, size: usize, alignment: usize) -> Self {
        Self {
            name: name.to_string(),
            kind,
            size,
            alignment,
            fields: Vec::new(),
            value_ranges: vec![0..size],
            bool_offsets: if kind == TypeKind::Bool { vec![0] } else { Vec::new() },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    pub fn is_struct(&self) -> bool {
        self.kind == TypeKind::Struct
    }

    /// Fields in declaration order. Empty for primitives.
    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    /// Byte ranges that carry field data, in ascending order.
    ///
    /// Padding bytes are never part of a range. Adjacent ranges are merged.
    pub fn value_ranges(&self) -> &[Range<usize>] {
        &self.value_ranges
    }

    /// Offsets of every `bool` byte, nested struct fields included.
    ///
    /// Only 0 and 1 are valid values at these offsets.
    pub fn bool_offsets(&self) -> &[usize] {
        &self.bool_offsets
    }
}

/// Rounds `value` up to the next multiple of `alignment`.
///
/// `alignment` must be a power of two.
#[inline]
pub const fn align_up(value: usize, alignment: usize) -> usize {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

/// Computes the C-compatible layout of a struct.
///
/// Fields are placed in declaration order, each at the next offset aligned
/// to its own alignment. The struct alignment is the largest field
/// alignment and the total size is rounded up to it.
pub(crate) fn layout_struct(
    name: String,
    members: Vec<(String, TypeHandle, &TypeMeta)>,
) -> Result<TypeMeta, TypeError> {
    if members.is_empty() {
        return Err(TypeError::EmptyStruct { name });
    }

    let mut offset = 0usize;
    let mut struct_alignment = 1usize;
    let mut fields = Vec::with_capacity(members.len());
    let mut value_ranges: Vec<Range<usize>> = Vec::new();
    let mut bool_offsets = Vec::new();

    for (field_name, ty, meta) in members {
        if !meta.alignment.is_power_of_two() {
            return Err(TypeError::InvalidAlignment {
                name: meta.name.clone(),
                align: meta.alignment,
            });
        }

        struct_alignment = struct_alignment.max(meta.alignment);
        offset = checked_align_up(offset, meta.alignment)
            .ok_or_else(|| TypeError::LayoutOverflow { name: name.clone() })?;

        let field_offset =
            u32::try_from(offset).map_err(|_| TypeError::LayoutOverflow { name: name.clone() })?;

        for range in &meta.value_ranges {
            push_range(&mut value_ranges, offset + range.start..offset + range.end);
        }
        bool_offsets.extend(meta.bool_offsets.iter().map(|inner| offset + inner));

        fields.push(StructField {
            name: field_name,
            ty,
            offset: field_offset,
        });
        offset = offset
            .checked_add(meta.size)
            .ok_or_else(|| TypeError::LayoutOverflow { name: name.clone() })?;
    }

    let size = checked_align_up(offset, struct_alignment)
        .ok_or_else(|| TypeError::LayoutOverflow { name: name.clone() })?;
    if u32::try_from(size).is_err() {
        return Err(TypeError::LayoutOverflow { name });
    }

    Ok(TypeMeta {
        name,
        kind: TypeKind::Struct,
        size,
        alignment: struct_alignment,
        fields,
        value_ranges,
        bool_offsets,
    })
}

fn checked_align_up(value: usize, alignment: usize) -> Option<usize> {
    value
        .checked_add(alignment - 1)
        .map(|bumped| bumped & !(alignment - 1))
}

fn push_range(ranges: &mut Vec<Range<usize>>, range: Range<usize>) {
    match ranges.last_mut() {
        Some(last) if last.end == range.start => last.end = range.end,
        _ => ranges.push(range),
    }
}
