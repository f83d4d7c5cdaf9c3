//! Handlers for the `/families` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_core::validation::validate_required;
use giftlist_db::models::family::{CreateFamily, Family};
use giftlist_db::repositories::FamilyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/families
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateFamily>,
) -> AppResult<(StatusCode, Json<Family>)> {
    validate_required("name", &input.name)?;
    let family = FamilyRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(family)))
}

/// GET /api/families
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Family>>> {
    let families = FamilyRepo::list_for_owner(&state.pool, user.user_id).await?;
    Ok(Json(families))
}

/// GET /api/families/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Family>> {
    let family = FamilyRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_family(id, &user))?;
    Ok(Json(family))
}

/// Build the error for a family that is missing or owned by someone else.
/// The two cases are deliberately indistinguishable to the caller.
pub(crate) fn forbidden_family(id: DbId, user: &AuthUser) -> AppError {
    AppError::Core(CoreError::Forbidden(format!(
        "Family {id} is not accessible to user {}",
        user.user_id
    )))
}
