//! Route definitions for loved ones and their nested resources.
//!
//! ```text
//! GET  /{id}                  -> get_detail
//! GET  /{id}/gifts            -> gift::list_for_person
//! POST /{id}/gifts            -> gift::create
//! GET  /{id}/budget-limits    -> budget_limit::list_for_person
//! POST /{id}/budget-limits    -> budget_limit::create
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{budget_limit, gift, person};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(person::get_detail))
        .route(
            "/{id}/gifts",
            get(gift::list_for_person).post(gift::create),
        )
        .route(
            "/{id}/budget-limits",
            get(budget_limit::list_for_person).post(budget_limit::create),
        )
}
