//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UpdateLog` - Storage for accepted webhook deliveries
//! - `OAuthProvider` - Authorization-code exchange and profile lookup

mod oauth_provider;
mod update_log;

pub use oauth_provider::OAuthProvider;
pub use update_log::UpdateLog;
