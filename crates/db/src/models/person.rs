//! Loved-one (person) entity model and DTOs.

use chrono::NaiveDate;
use giftlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `loved_ones` table.
///
/// The optional sequence columns (`interests`, `hobbies`, `favorite_colors`)
/// are nullable `TEXT[]` in the schema; `None` and an empty array are
/// treated identically by the suggestion context builder.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub family_id: DbId,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub interests: Option<Vec<String>>,
    pub hobbies: Option<Vec<String>>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
    pub favorite_colors: Option<Vec<String>>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new loved one under a family.
#[derive(Debug, Deserialize)]
pub struct CreatePerson {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub interests: Option<Vec<String>>,
    pub hobbies: Option<Vec<String>>,
    pub clothing_size: Option<String>,
    pub shoe_size: Option<String>,
    pub favorite_colors: Option<Vec<String>>,
    pub notes: Option<String>,
}
