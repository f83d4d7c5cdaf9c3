//! Per-person budget limit model and DTOs.

use giftlist_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `person_budget_limits` table.
///
/// A row with `event_id = NULL` is the person's general budget ceiling;
/// otherwise the limit applies to that person + event pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BudgetLimit {
    pub id: DbId,
    pub loved_one_id: DbId,
    pub event_id: Option<DbId>,
    pub budget_limit: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a budget limit for a loved one.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetLimit {
    pub event_id: Option<DbId>,
    pub budget_limit: Decimal,
}
