//! Repository for the `families` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::family::{CreateFamily, Family};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, owner_user_id, created_at, updated_at";

/// Provides owner-scoped CRUD operations for families.
pub struct FamilyRepo;

impl FamilyRepo {
    /// Insert a new family owned by the given user, returning the created
    /// row.
    pub async fn create(
        pool: &PgPool,
        owner_user_id: DbId,
        input: &CreateFamily,
    ) -> Result<Family, sqlx::Error> {
        let query = format!(
            "INSERT INTO families (name, owner_user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Family>(&query)
            .bind(&input.name)
            .bind(owner_user_id)
            .fetch_one(pool)
            .await
    }

    /// List the families owned by a user, newest first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_user_id: DbId,
    ) -> Result<Vec<Family>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM families
             WHERE owner_user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Family>(&query)
            .bind(owner_user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a family by id, but only when it is owned by the given user.
    ///
    /// Returns `None` both when the family does not exist and when it is
    /// owned by someone else.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_user_id: DbId,
    ) -> Result<Option<Family>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM families
             WHERE id = $1 AND owner_user_id = $2"
        );
        sqlx::query_as::<_, Family>(&query)
            .bind(id)
            .bind(owner_user_id)
            .fetch_optional(pool)
            .await
    }
}
