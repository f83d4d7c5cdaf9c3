//! Route definition for the gift-suggestion chat.
//!
//! ```text
//! POST /chat -> suggest
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat::suggest))
}
