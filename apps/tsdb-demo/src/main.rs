//! Demo for the columnar store.
//!
//! Registers a `Vec3` and a timestamped `Tick` record, inserts rows and
//! prints the first row of each type.

use anyhow::Context;
use clap::Parser;
use tsdb_core::{Record, Store, StoreConfig, TimestampNs, TypeHandle};

/// Command-line arguments for the demo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rows to insert per record type
    #[arg(short, long, default_value_t = 3)]
    rows: usize,

    /// Print the registered schema as JSON
    #[arg(long)]
    schema_json: bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

unsafe impl Record for Vec3 {}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct Tick {
    ts: TimestampNs,
    price: f64,
    qty: u32,
    buy: bool,
}

unsafe impl Record for Tick {}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let mut store = Store::with_config(StoreConfig {
        estimated_types: 2,
        initial_rows: args.rows,
    });

    let vec3 = store
        .register_struct(
            "Vec3",
            [
                ("x", TypeHandle::F64),
                ("y", TypeHandle::F64),
                ("z", TypeHandle::F64),
            ],
        )
        .context("registering Vec3")?;
    let tick = store
        .register_struct(
            "Tick",
            [
                ("ts", TypeHandle::TIMESTAMP_NS),
                ("price", TypeHandle::F64),
                ("qty", TypeHandle::U32),
                ("buy", TypeHandle::BOOL),
            ],
        )
        .context("registering Tick")?;

    for i in 0..args.rows {
        let step = i as f64 + 1.0;
        store.insert(
            &Vec3 {
                x: step,
                y: step,
                z: step,
            },
            vec3,
        )?;
        store.insert(
            &Tick {
                ts: TimestampNs::now(),
                price: 100.0 + step,
                qty: (i as u32 + 1) * 10,
                buy: i % 2 == 0,
            },
            tick,
        )?;
    }
    tracing::info!("Inserted {} rows per type", args.rows);

    let first_vec: Vec3 = store.query_first(vec3)?;
    let first_tick: Tick = store.query_first(tick)?;
    println!(
        "Vec3({}, {}, {}) [{} rows]",
        first_vec.x,
        first_vec.y,
        first_vec.z,
        store.row_count(vec3)?
    );
    println!(
        "Tick(ts={}, price={}, qty={}, buy={}) [{} rows]",
        first_tick.ts.as_nanos(),
        first_tick.price,
        first_tick.qty,
        first_tick.buy,
        store.row_count(tick)?
    );

    if args.schema_json {
        let json = serde_json::to_string_pretty(&store.schema_snapshot())?;
        println!("{json}");
    }

    Ok(())
}
