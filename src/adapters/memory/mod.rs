//! In-memory adapters.

mod in_memory_update_log;

pub use in_memory_update_log::{InMemoryUpdateLog, DEFAULT_LOG_CAPACITY};
