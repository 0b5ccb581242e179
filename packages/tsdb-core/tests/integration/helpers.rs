//! Shared record types and registrations for integration tests.

use tsdb_core::{Record, Store, TimestampNs, TypeHandle};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

unsafe impl Record for Vec3 {}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tick {
    pub ts: TimestampNs,
    pub price: f64,
    pub qty: u32,
    pub side: u8,
    pub halted: bool,
}

unsafe impl Record for Tick {}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Mixed {
    pub a: u8,
    pub b: i16,
    pub c: i32,
    pub d: i8,
    pub e: u64,
    pub f: f32,
    pub g: u16,
    pub h: i64,
}

unsafe impl Record for Mixed {}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    pub id: u32,
    pub position: Vec3,
    pub alive: bool,
}

unsafe impl Record for Particle {}

pub fn register_vec3(store: &mut Store) -> TypeHandle {
    store
        .register_struct(
            "Vec3",
            [
                ("x", TypeHandle::F64),
                ("y", TypeHandle::F64),
                ("z", TypeHandle::F64),
            ],
        )
        .unwrap()
}

pub fn register_tick(store: &mut Store) -> TypeHandle {
    store
        .register_struct(
            "Tick",
            [
                ("ts", TypeHandle::TIMESTAMP_NS),
                ("price", TypeHandle::F64),
                ("qty", TypeHandle::U32),
                ("side", TypeHandle::U8),
                ("halted", TypeHandle::BOOL),
            ],
        )
        .unwrap()
}

pub fn register_mixed(store: &mut Store) -> TypeHandle {
    store
        .register_struct(
            "Mixed",
            [
                ("a", TypeHandle::U8),
                ("b", TypeHandle::I16),
                ("c", TypeHandle::I32),
                ("d", TypeHandle::I8),
                ("e", TypeHandle::U64),
                ("f", TypeHandle::F32),
                ("g", TypeHandle::U16),
                ("h", TypeHandle::I64),
            ],
        )
        .unwrap()
}

pub fn register_particle(store: &mut Store, vec3: TypeHandle) -> TypeHandle {
    store
        .register_struct(
            "Particle",
            [
                ("id", TypeHandle::U32),
                ("position", vec3),
                ("alive", TypeHandle::BOOL),
            ],
        )
        .unwrap()
}
