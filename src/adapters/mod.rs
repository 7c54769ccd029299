//! Adapters - implementations of ports and the HTTP edge.

pub mod http;
pub mod instagram;
pub mod memory;

pub use instagram::{InstagramOAuthAdapter, InstagramOAuthConfig};
pub use memory::InMemoryUpdateLog;
