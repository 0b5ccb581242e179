//! Column and table storage.

mod column;
#[allow(clippy::module_inception)]
mod table;

pub use column::Column;
pub use table::Table;
