//! System smoke tests.
//!
//! Exercise several record types side by side and the schema snapshot.

use ntest::timeout;

use tsdb_core::schema::SchemaSnapshot;
use tsdb_core::types::{TypeKind, PRIMITIVE_COUNT};
use tsdb_core::{Store, TimestampNs, TypeHandle};

use super::helpers::*;

/// Several types stored together keep independent tables
#[timeout(5000)]
#[test]
fn test_multiple_types_smoke() {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store);
    let tick = register_tick(&mut store);
    let particle = register_particle(&mut store, vec3);

    for i in 0..1_000u32 {
        store
            .insert(
                &Vec3 {
                    x: f64::from(i),
                    y: 0.0,
                    z: -f64::from(i),
                },
                vec3,
            )
            .unwrap();
        store
            .insert(
                &Tick {
                    ts: TimestampNs::from_nanos(u64::from(i) * 1_000),
                    price: 10.0 + f64::from(i),
                    qty: i,
                    side: (i % 2) as u8,
                    halted: i % 7 == 0,
                },
                tick,
            )
            .unwrap();
    }

    assert_eq!(store.row_count(vec3).unwrap(), 1_000);
    assert_eq!(store.row_count(tick).unwrap(), 1_000);
    assert_eq!(store.row_count(particle).unwrap(), 0);
    assert_eq!(store.table_count(), 2);

    let first_tick: Tick = store.query_first(tick).unwrap();
    assert_eq!(first_tick.ts, TimestampNs::from_nanos(0));
    assert_eq!(first_tick.price, 10.0);
    assert!(first_tick.halted);

    assert_eq!(store.query_first::<Particle>(particle).unwrap(), Particle::default());
}

/// Registered layouts agree with the compiler's repr(C) layout
#[timeout(1000)]
#[test]
fn test_layouts_match_native_repr_c() {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store);
    let tick = register_tick(&mut store);
    let mixed = register_mixed(&mut store);
    let particle = register_particle(&mut store, vec3);

    let registry = store.registry();
    let cases = [
        (vec3, std::mem::size_of::<Vec3>(), std::mem::align_of::<Vec3>()),
        (tick, std::mem::size_of::<Tick>(), std::mem::align_of::<Tick>()),
        (mixed, std::mem::size_of::<Mixed>(), std::mem::align_of::<Mixed>()),
        (
            particle,
            std::mem::size_of::<Particle>(),
            std::mem::align_of::<Particle>(),
        ),
    ];
    for (handle, size, align) in cases {
        assert_eq!(registry.size_of(handle).unwrap(), size);
        assert_eq!(registry.align_of(handle).unwrap(), align);
    }

    let offsets: Vec<usize> = registry
        .fields_of(mixed)
        .unwrap()
        .iter()
        .map(|f| f.offset())
        .collect();
    assert_eq!(offsets, vec![0, 2, 4, 8, 16, 24, 28, 32]);
}

/// Schema snapshot serializes with serde_json and round-trips
#[test]
fn test_schema_snapshot_json() -> anyhow::Result<()> {
    let mut store = Store::new();
    let vec3 = register_vec3(&mut store);

    let snapshot = store.schema_snapshot();
    assert_eq!(snapshot.types.len(), PRIMITIVE_COUNT + 1);
    assert_eq!(snapshot.types[TypeHandle::TIMESTAMP_NS.index()].kind, TypeKind::TimestampNs);

    let json = serde_json::to_string(&snapshot)?;
    assert!(json.contains("\"name\":\"Vec3\""));
    assert!(json.contains("\"kind\":\"struct\""));

    let parsed: SchemaSnapshot = serde_json::from_str(&json)?;
    assert_eq!(parsed, snapshot);
    let entry = parsed
        .get(vec3)
        .ok_or_else(|| anyhow::anyhow!("Vec3 missing from snapshot"))?;
    assert_eq!(entry.size, 24);
    assert_eq!(entry.fields.len(), 3);
    assert_eq!(entry.fields[2].offset, 16);
    Ok(())
}
