//! Meta Webhooks - webhook receiver for Facebook, Instagram and Threads.
//!
//! Answers subscription handshakes, authenticates deliveries with
//! `X-Hub-Signature`, keeps a bounded in-memory log of received updates, and
//! relays the Instagram OAuth authorization-code exchange.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
