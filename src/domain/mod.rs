//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `webhook` - Platforms, subscription handshake, signature verification
//! - `updates` - Received update records
//! - `oauth` - Authorization redirect classification and token grants

pub mod oauth;
pub mod updates;
pub mod webhook;
