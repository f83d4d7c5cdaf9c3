//! Repository for the `person_budget_limits` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget_limit::{BudgetLimit, CreateBudgetLimit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, loved_one_id, event_id, budget_limit, created_at, updated_at";

/// Provides CRUD operations for per-person budget limits.
pub struct BudgetLimitRepo;

impl BudgetLimitRepo {
    /// Insert a new budget limit for a loved one, returning the created row.
    ///
    /// Callers must have already verified ownership of the loved one.
    pub async fn create(
        pool: &PgPool,
        loved_one_id: DbId,
        input: &CreateBudgetLimit,
    ) -> Result<BudgetLimit, sqlx::Error> {
        let query = format!(
            "INSERT INTO person_budget_limits (loved_one_id, event_id, budget_limit)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BudgetLimit>(&query)
            .bind(loved_one_id)
            .bind(input.event_id)
            .bind(input.budget_limit)
            .fetch_one(pool)
            .await
    }

    /// List a loved one's budget limits, general ceiling first, then
    /// event-scoped limits by creation time.
    pub async fn list_for_person(
        pool: &PgPool,
        loved_one_id: DbId,
    ) -> Result<Vec<BudgetLimit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM person_budget_limits
             WHERE loved_one_id = $1
             ORDER BY event_id NULLS FIRST, created_at"
        );
        sqlx::query_as::<_, BudgetLimit>(&query)
            .bind(loved_one_id)
            .fetch_all(pool)
            .await
    }
}
