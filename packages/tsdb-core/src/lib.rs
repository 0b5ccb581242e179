//! Core storage engine for a typed in-memory columnar store.
//!
//! Provides the runtime type registry with C-compatible struct layout,
//! per-field column storage, and the store facade that erases records into
//! columns and reassembles them.

pub mod config;
pub mod error;
pub mod record;
pub mod schema;
pub mod store;
pub mod table;
pub mod types;

pub use config::StoreConfig;
pub use error::StoreError;
pub use record::Record;
pub use store::Store;
pub use types::{TimestampNs, TypeHandle};
