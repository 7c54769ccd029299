//! Webhook handlers.
//!
//! ## Commands
//! - Receiving a platform delivery (signature check + record)
//!
//! ## Queries
//! - Subscription verification handshake
//! - Listing received updates

mod list_updates;
mod receive_update;
mod verify_subscription;

// Commands
pub use receive_update::{ReceiveUpdateCommand, ReceiveUpdateHandler, ReceiveUpdateResult};

// Queries
pub use list_updates::{ListUpdatesHandler, ListUpdatesQuery, ListUpdatesResult};
pub use verify_subscription::{
    VerifySubscriptionHandler, VerifySubscriptionQuery, VerifySubscriptionResult,
};
