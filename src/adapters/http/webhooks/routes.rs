//! Axum router configuration for webhook endpoints.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::{body::Bytes, routing::get, Router};

use crate::domain::webhook::{Platform, SubscriptionChallenge};

use super::super::state::AppState;
use super::handlers::{receive_update, verify_subscription};

/// Create the webhook router.
///
/// # Routes
/// - `GET /facebook`, `/instagram`, `/threads` - Subscription verification
/// - `POST /facebook`, `/instagram`, `/threads` - Receive deliveries
pub fn webhook_routes() -> Router<AppState> {
    Platform::ALL
        .into_iter()
        .fold(Router::new(), |router, platform| {
            router.route(
                platform.route_path(),
                get(
                    move |state: State<AppState>, query: Query<SubscriptionChallenge>| {
                        verify_subscription(platform, state, query)
                    },
                )
                .post(move |state: State<AppState>, headers: HeaderMap, body: Bytes| {
                    receive_update(platform, state, headers, body)
                }),
            )
        })
}
