//! OAuth handlers.
//!
//! ## Commands
//! - Exchanging an authorization code from the provider redirect

mod exchange_authorization_code;

pub use exchange_authorization_code::{
    ExchangeAuthorizationCodeCommand, ExchangeAuthorizationCodeHandler,
};
