//! Repository for the `loved_ones` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person};

/// Column list shared across queries to avoid repetition. Columns are
/// qualified with the `loved_ones` alias so the ownership join can reuse it.
const COLUMNS: &str = "l.id, l.family_id, l.name, l.birth_date, l.interests, l.hobbies, \
                       l.clothing_size, l.shoe_size, l.favorite_colors, l.notes, \
                       l.created_at, l.updated_at";

/// Provides owner-scoped CRUD operations for loved ones.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new loved one under a family, returning the created row.
    ///
    /// Callers must have already verified family ownership; this method
    /// trusts the `family_id` it is given.
    pub async fn create(
        pool: &PgPool,
        family_id: DbId,
        input: &CreatePerson,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO loved_ones AS l
                 (family_id, name, birth_date, interests, hobbies,
                  clothing_size, shoe_size, favorite_colors, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(family_id)
            .bind(&input.name)
            .bind(input.birth_date)
            .bind(&input.interests)
            .bind(&input.hobbies)
            .bind(&input.clothing_size)
            .bind(&input.shoe_size)
            .bind(&input.favorite_colors)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List the loved ones of a family, newest first.
    pub async fn list_for_family(
        pool: &PgPool,
        family_id: DbId,
    ) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM loved_ones l
             WHERE l.family_id = $1
             ORDER BY l.created_at DESC"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(family_id)
            .fetch_all(pool)
            .await
    }

    /// Find a loved one by id, but only when their family is owned by the
    /// given user.
    ///
    /// This is the ownership guard used by every person-scoped route,
    /// including the suggestion chat: the row is joined to its family and
    /// filtered on the owner, so a missing person and a person owned by
    /// someone else both come back as `None`.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_user_id: DbId,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM loved_ones l
             JOIN families f ON f.id = l.family_id
             WHERE l.id = $1 AND f.owner_user_id = $2"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(owner_user_id)
            .fetch_optional(pool)
            .await
    }
}
