//! Handlers for loved ones (`/families/{id}/persons`, `/persons/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use giftlist_core::error::CoreError;
use giftlist_core::types::DbId;
use giftlist_core::validation::validate_required;
use giftlist_db::models::budget_limit::BudgetLimit;
use giftlist_db::models::gift::Gift;
use giftlist_db::models::person::{CreatePerson, Person};
use giftlist_db::repositories::{BudgetLimitRepo, FamilyRepo, GiftRepo, PersonRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::family::forbidden_family;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Full person detail as shown on the person page: the profile, the gift
/// list (newest first), and any budget limits.
#[derive(Debug, Serialize)]
pub struct PersonDetail {
    pub person: Person,
    pub gifts: Vec<Gift>,
    pub budget_limits: Vec<BudgetLimit>,
}

/// POST /api/families/{id}/persons
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(family_id): Path<DbId>,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Person>)> {
    // The family id comes from the URL; it must resolve through the
    // caller's ownership before anything is written.
    FamilyRepo::find_owned(&state.pool, family_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_family(family_id, &user))?;

    validate_required("name", &input.name)?;
    let person = PersonRepo::create(&state.pool, family_id, &input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /api/families/{id}/persons
pub async fn list_for_family(
    State(state): State<AppState>,
    user: AuthUser,
    Path(family_id): Path<DbId>,
) -> AppResult<Json<Vec<Person>>> {
    FamilyRepo::find_owned(&state.pool, family_id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_family(family_id, &user))?;

    let persons = PersonRepo::list_for_family(&state.pool, family_id).await?;
    Ok(Json(persons))
}

/// GET /api/persons/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<PersonDetail>> {
    let person = PersonRepo::find_owned(&state.pool, id, user.user_id)
        .await?
        .ok_or_else(|| forbidden_person(id, &user))?;

    let gifts = GiftRepo::list_for_person(&state.pool, person.id).await?;
    let budget_limits = BudgetLimitRepo::list_for_person(&state.pool, person.id).await?;

    Ok(Json(PersonDetail {
        person,
        gifts,
        budget_limits,
    }))
}

/// Build the error for a person that is missing or owned by someone else.
/// The two cases are deliberately indistinguishable to the caller.
pub(crate) fn forbidden_person(id: DbId, user: &AuthUser) -> AppError {
    AppError::Core(CoreError::Forbidden(format!(
        "Person {id} is not accessible to user {}",
        user.user_id
    )))
}
