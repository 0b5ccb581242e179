//! Store configuration.

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Expected number of struct types, reserved on top of the primitives
    pub estimated_types: usize,
    /// Rows reserved in each column when its table is first created
    pub initial_rows: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            estimated_types: 1,
            initial_rows: 0,
        }
    }
}
