//! Route definitions, one module per resource.

pub mod auth;
pub mod chat;
pub mod families;
pub mod gifts;
pub mod health;
pub mod persons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /families                            list, create
/// /families/{id}                       get
/// /families/{id}/persons               list, create
/// /families/{id}/events                list, create
///
/// /persons/{id}                        detail (person + gifts + budgets)
/// /persons/{id}/gifts                  list, create
/// /persons/{id}/budget-limits          list, create
///
/// /gifts/{id}                          update
/// /gifts/{id}/purchased                toggle purchase state
///
/// /chat                                gift-suggestion chat (POST)
/// ```
///
/// Everything outside `/auth/register`, `/auth/login`, and `/auth/refresh`
/// requires a Bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/families", families::router())
        .nest("/persons", persons::router())
        .nest("/gifts", gifts::router())
        .merge(chat::router())
}
