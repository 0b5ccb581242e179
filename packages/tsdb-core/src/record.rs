//! Plain fixed-layout record values and their byte erasure.
//!
//! These are the only places where a typed record is reinterpreted as bytes.

use std::mem::{align_of, size_of, MaybeUninit};
use std::ops::Range;

use crate::error::StoreError;
use crate::types::{TypeHandle, TypeMeta};

/// Marker trait for record types stored by value.
///
/// # Safety
///
/// Implementors must guarantee:
/// - the type is `#[repr(C)]` and its fields, in declaration order, have
///   exactly the primitive types of the struct it is inserted under
///   (nested records must also satisfy this trait)
/// - the type holds no pointers, references or other non-plain data
/// - the all-zero bit pattern is a valid value
///
/// The store checks total size and alignment but cannot check field order or
/// field widths. A mismatch yields silently corrupted values.
pub unsafe trait Record: Copy + 'static {}

/// Checks that `R` has the size and alignment registered for `layout`.
pub(crate) fn check_layout<R: Record>(
    handle: TypeHandle,
    layout: &TypeMeta,
) -> Result<(), StoreError> {
    let (got_size, got_align) = (size_of::<R>(), align_of::<R>());
    if got_size == layout.size() && got_align == layout.alignment() {
        return Ok(());
    }

    tracing::warn!(
        "Record type {} does not match layout of '{}' ({})",
        std::any::type_name::<R>(),
        layout.name(),
        handle
    );
    Err(StoreError::LayoutMismatch {
        handle,
        type_name: layout.name().to_string(),
        expected_size: layout.size(),
        expected_align: layout.alignment(),
        got_size,
        got_align,
    })
}

/// Copies the value-bearing bytes of `value` into a zeroed row buffer.
///
/// Padding is never read; it stays zero in the returned row.
pub(crate) fn erase<R: Record>(value: &R, value_ranges: &[Range<usize>]) -> Vec<u8> {
    let size = size_of::<R>();
    let mut row = vec![0u8; size];
    let src = (value as *const R).cast::<u8>();

    for range in value_ranges {
        assert!(range.end <= size, "value range exceeds record size");
        // SAFETY: `range` lies within `R` and covers field bytes only, which
        // are initialized because `R: Record` matches the registered layout.
        unsafe {
            std::ptr::copy_nonoverlapping(
                src.add(range.start),
                row[range.clone()].as_mut_ptr(),
                range.len(),
            );
        }
    }
    row
}

/// Builds an `R` from a zeroed value whose bytes are filled by `fill`.
pub(crate) fn materialize<R, F>(fill: F) -> Result<R, StoreError>
where
    R: Record,
    F: FnOnce(&mut [u8]) -> Result<(), StoreError>,
{
    let mut out = MaybeUninit::<R>::zeroed();

    // SAFETY: every byte of `out` was zeroed, so viewing it as `[u8]` is
    // sound.
    let bytes =
        unsafe { std::slice::from_raw_parts_mut(out.as_mut_ptr().cast::<u8>(), size_of::<R>()) };
    fill(bytes)?;

    // SAFETY: all-zero is a valid `R`. `fill` copies stored field bytes of
    // the same layout; every stored `bool` byte was checked to be 0 or 1 on
    // insert and the other primitives accept any bit pattern.
    Ok(unsafe { out.assume_init() })
}
