//! Handlers for family events (`/families/{id}/events`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giftlist_core::types::DbId;
use giftlist_core::validation::validate_required;
use giftlist_db::models::event::{CreateEvent, Event};
use giftlist_db::repositories::{EventRepo, FamilyRepo};

use crate::error::AppResult;
use crate::handlers::family::forbidden_family;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/families/{id}/events
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(family_id): Path<DbId>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    FamilyRepo::find_owned(&state.pool, family_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_family(family_id, &user))?;

    validate_required("name", &input.name)?;
    let event = EventRepo::create(&state.pool, family_id, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/families/{id}/events
pub async fn list_for_family(
    State(state): State<AppState>,
    user: AuthUser,
    Path(family_id): Path<DbId>,
) -> AppResult<Json<Vec<Event>>> {
    FamilyRepo::find_owned(&state.pool, family_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_family(family_id, &user))?;

    let events = EventRepo::list_for_family(&state.pool, family_id).await?;
    Ok(Json(events))
}
