//! Repository for the `events` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, family_id, name, date, budget_limit, created_at, updated_at";

/// Provides CRUD operations for family events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event under a family, returning the created row.
    ///
    /// Callers must have already verified family ownership.
    pub async fn create(
        pool: &PgPool,
        family_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (family_id, name, date, budget_limit)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(family_id)
            .bind(&input.name)
            .bind(input.date)
            .bind(input.budget_limit)
            .fetch_one(pool)
            .await
    }

    /// List a family's events ordered by date.
    pub async fn list_for_family(
        pool: &PgPool,
        family_id: DbId,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE family_id = $1
             ORDER BY date"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(family_id)
            .fetch_all(pool)
            .await
    }
}
