//! Handler for the gift-suggestion chat endpoint.
//!
//! The flow is a single-shot pipeline: authenticate, verify ownership of
//! the requested person, aggregate their profile and gift history, compose
//! the system instruction, call the completion provider once, relay the
//! reply. Nothing is persisted and nothing is cached: each request rebuilds
//! its context from storage, and ownership is re-checked on every turn.
//! If the caller disconnects mid-request the provider call runs to
//! completion on a best-effort basis; its result is discarded.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use giftlist_core::error::CoreError;
use giftlist_core::suggestion::{self, GiftHistoryItem, PersonProfile};
use giftlist_core::types::DbId;
use giftlist_db::models::gift::Gift;
use giftlist_db::models::person::Person;
use giftlist_db::repositories::{GiftRepo, PersonRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub person_id: DbId,
    pub message: String,
}

/// Success response: the generated suggestion text.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// POST /api/chat
///
/// The `AuthUser` extractor runs before the body is read, so an
/// unauthenticated request is rejected with 401 before any data is touched.
pub async fn suggest(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    // A malformed body is treated like any other failure inside the flow:
    // the caller sees the generic internal error, the detail is logged.
    let Json(input) = payload
        .map_err(|e| AppError::InternalError(format!("Invalid chat request body: {e}")))?;

    // 1. Ownership guard. A missing person and a person owned by someone
    //    else are indistinguishable; neither reaches the prompt.
    let person = PersonRepo::find_owned(&state.pool, input.person_id, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Forbidden(format!(
                "Person {} is not accessible to user {}",
                input.person_id, user.user_id
            )))
        })?;

    // 2. Aggregate the gift history, newest first.
    let gifts = GiftRepo::list_for_person(&state.pool, person.id).await?;

    // 3. Compose the system instruction and invoke the provider once.
    let prompt = suggestion::system_prompt(&profile_of(&person), &history_of(&gifts));
    let reply = state.completion.complete(&prompt, &input.message).await?;

    Ok(Json(ChatResponse { response: reply }))
}

/// Map a stored person row onto the suggestion profile.
fn profile_of(person: &Person) -> PersonProfile {
    PersonProfile {
        name: person.name.clone(),
        birth_date: person.birth_date,
        interests: person.interests.clone().unwrap_or_default(),
        hobbies: person.hobbies.clone().unwrap_or_default(),
        clothing_size: person.clothing_size.clone(),
        shoe_size: person.shoe_size.clone(),
        favorite_colors: person.favorite_colors.clone().unwrap_or_default(),
        notes: person.notes.clone(),
    }
}

/// Map stored gift rows onto history items, preserving their order.
fn history_of(gifts: &[Gift]) -> Vec<GiftHistoryItem> {
    gifts
        .iter()
        .map(|gift| GiftHistoryItem {
            name: gift.name.clone(),
            description: gift.description.clone(),
        })
        .collect()
}
