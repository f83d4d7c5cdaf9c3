//! Handlers for per-person budget limits (`/persons/{id}/budget-limits`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_db::models::budget_limit::{BudgetLimit, CreateBudgetLimit};
use giftlist_db::repositories::{BudgetLimitRepo, PersonRepo};
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::handlers::person::forbidden_person;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/persons/{id}/budget-limits
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(person_id): Path<DbId>,
    Json(input): Json<CreateBudgetLimit>,
) -> AppResult<(StatusCode, Json<BudgetLimit>)> {
    PersonRepo::find_owned(&state.pool, person_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_person(person_id, &user))?;

    if input.budget_limit <= Decimal::ZERO {
        return Err(AppError::Core(CoreError::Validation(
            "budget_limit must be positive".into(),
        )));
    }

    let limit = BudgetLimitRepo::create(&state.pool, person_id, &input).await?;
    Ok((StatusCode::CREATED, Json(limit)))
}

/// GET /api/persons/{id}/budget-limits
pub async fn list_for_person(
    State(state): State<AppState>,
    user: AuthUser,
    Path(person_id): Path<DbId>,
) -> AppResult<Json<Vec<BudgetLimit>>> {
    PersonRepo::find_owned(&state.pool, person_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_person(person_id, &user))?;

    let limits = BudgetLimitRepo::list_for_person(&state.pool, person_id).await?;
    Ok(Json(limits))
}
