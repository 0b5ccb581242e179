//! Property tests for struct layout and byte-level round trips.

use proptest::prelude::*;

use tsdb_core::types::{TypeRegistry, BUILTIN_PRIMITIVES};
use tsdb_core::{Store, TypeHandle};

fn field_types() -> impl Strategy<Value = Vec<TypeHandle>> {
    prop::collection::vec(
        prop::sample::select(
            BUILTIN_PRIMITIVES
                .iter()
                .map(|(handle, ..)| *handle)
                .collect::<Vec<_>>(),
        ),
        1..16,
    )
}

fn named(types: &[TypeHandle]) -> Vec<(String, TypeHandle)> {
    types
        .iter()
        .enumerate()
        .map(|(i, ty)| (format!("f{i}"), *ty))
        .collect()
}

proptest! {
    #[test]
    fn layout_is_deterministic(types in field_types(), noise in field_types()) {
        let mut first = TypeRegistry::new();
        let a = first.register_struct("S", named(&types)).unwrap();

        let mut second = TypeRegistry::new();
        second.register_struct("Noise", named(&noise)).unwrap();
        let b = second.register_struct("S", named(&types)).unwrap();
        let c = second.register_struct("S", named(&types)).unwrap();

        let meta_a = first.meta_of(a).unwrap();
        for handle in [b, c] {
            let meta = second.meta_of(handle).unwrap();
            prop_assert_eq!(meta.size(), meta_a.size());
            prop_assert_eq!(meta.alignment(), meta_a.alignment());
            prop_assert_eq!(meta.fields(), meta_a.fields());
        }
        prop_assert_ne!(b, c);
    }

    #[test]
    fn layout_respects_alignment(types in field_types()) {
        let mut registry = TypeRegistry::new();
        let handle = registry.register_struct("S", named(&types)).unwrap();
        let meta = registry.meta_of(handle).unwrap();

        prop_assert!(meta.alignment().is_power_of_two());
        prop_assert_eq!(meta.size() % meta.alignment(), 0);

        let mut previous_end = 0;
        for field in meta.fields() {
            let field_meta = registry.meta_of(field.ty).unwrap();
            prop_assert_eq!(field.offset() % field_meta.alignment(), 0);
            prop_assert!(field.offset() >= previous_end);
            prop_assert!(meta.alignment() >= field_meta.alignment());
            previous_end = field.offset() + field_meta.size();
        }
        prop_assert!(previous_end <= meta.size());
        prop_assert!(meta.size() < previous_end + meta.alignment());
    }

    #[test]
    fn bytes_round_trip_with_zeroed_padding(types in field_types(), seed in any::<u8>()) {
        let mut store = Store::new();
        let handle = store.register_struct("S", named(&types)).unwrap();
        let meta = store.registry().meta_of(handle).unwrap().clone();

        let mut row = vec![0u8; meta.size()];
        for range in meta.value_ranges() {
            for (i, byte) in row[range.clone()].iter_mut().enumerate() {
                // bool fields must stay 0 or 1
                *byte = (seed.wrapping_add(i as u8)) & 1;
            }
        }

        store.insert_bytes(handle, &row).unwrap();
        store.insert_bytes(handle, &vec![1u8; meta.size()]).unwrap();

        prop_assert_eq!(store.query_first_bytes(handle).unwrap(), row);
        prop_assert_eq!(store.row_count(handle).unwrap(), 2);
    }
}
