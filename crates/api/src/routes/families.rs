//! Route definitions for families and their nested resources.
//!
//! ```text
//! GET  /                  -> list
//! POST /                  -> create
//! GET  /{id}              -> get_by_id
//! GET  /{id}/persons      -> person::list_for_family
//! POST /{id}/persons      -> person::create
//! GET  /{id}/events       -> event::list_for_family
//! POST /{id}/events       -> event::create
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{event, family, person};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(family::list).post(family::create))
        .route("/{id}", get(family::get_by_id))
        .route(
            "/{id}/persons",
            get(person::list_for_family).post(person::create),
        )
        .route(
            "/{id}/events",
            get(event::list_for_family).post(event::create),
        )
}
