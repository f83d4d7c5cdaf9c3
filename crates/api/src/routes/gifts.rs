//! Route definitions for gift mutation.
//!
//! ```text
//! PUT /{id}            -> update
//! PUT /{id}/purchased  -> set_purchased
//! ```

use axum::routing::put;
use axum::Router;

use crate::handlers::gift;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(gift::update))
        .route("/{id}/purchased", put(gift::set_purchased))
}
