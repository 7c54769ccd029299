//! OAuth domain - authorization redirect classification and token grants.

mod callback;
mod errors;
mod grant;

pub use callback::{CallbackOutcome, CallbackParams};
pub use errors::{OAuthError, GENERIC_FAILURE_MESSAGE};
pub use grant::{AuthorizedAccount, TokenGrant, UserProfile};
