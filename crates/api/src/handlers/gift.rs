//! Handlers for gifts (`/persons/{id}/gifts`, `/gifts/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_core::validation::validate_required;
use giftlist_db::models::gift::{CreateGift, Gift, UpdateGift};
use giftlist_db::repositories::{GiftRepo, PersonRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::person::forbidden_person;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `PUT /api/gifts/{id}/purchased`.
#[derive(Debug, Deserialize)]
pub struct SetPurchasedRequest {
    pub purchased: bool,
}

/// POST /api/persons/{id}/gifts
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(person_id): Path<DbId>,
    Json(input): Json<CreateGift>,
) -> AppResult<(StatusCode, Json<Gift>)> {
    PersonRepo::find_owned(&state.pool, person_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_person(person_id, &user))?;

    validate_required("name", &input.name)?;
    let gift = GiftRepo::create(&state.pool, person_id, &input).await?;
    Ok((StatusCode::CREATED, Json(gift)))
}

/// GET /api/persons/{id}/gifts
pub async fn list_for_person(
    State(state): State<AppState>,
    user: AuthUser,
    Path(person_id): Path<DbId>,
) -> AppResult<Json<Vec<Gift>>> {
    PersonRepo::find_owned(&state.pool, person_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_person(person_id, &user))?;

    let gifts = GiftRepo::list_for_person(&state.pool, person_id).await?;
    Ok(Json(gifts))
}

/// PUT /api/gifts/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGift>,
) -> AppResult<Json<Gift>> {
    if let Some(name) = &input.name {
        validate_required("name", name)?;
    }

    let gift = GiftRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or_else(|| forbidden_gift(id, &user))?;
    Ok(Json(gift))
}

/// PUT /api/gifts/{id}/purchased
///
/// Toggle the purchase state. The purchase date is stamped/cleared
/// server-side; clients only say whether the gift is purchased.
pub async fn set_purchased(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetPurchasedRequest>,
) -> AppResult<Json<Gift>> {
    let gift = GiftRepo::set_purchased(&state.pool, id, user.user_id, input.purchased)
        .await?
        .ok_or_else(|| forbidden_gift(id, &user))?;
    Ok(Json(gift))
}

/// Build the error for a gift that is missing or owned by someone else.
/// The two cases are deliberately indistinguishable to the caller.
fn forbidden_gift(id: DbId, user: &AuthUser) -> AppError {
    AppError::Core(CoreError::Forbidden(format!(
        "Gift {id} is not accessible to user {}",
        user.user_id
    )))
}
