//! Event entity model and DTOs.

use chrono::NaiveDate;
use giftlist_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table (birthdays, holidays, anniversaries).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub family_id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub budget_limit: Option<Decimal>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event under a family.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub date: NaiveDate,
    pub budget_limit: Option<Decimal>,
}
