//! Received updates.

mod record;

pub use record::UpdateRecord;
