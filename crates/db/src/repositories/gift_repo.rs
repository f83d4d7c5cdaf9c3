//! Repository for the `gifts` table.

use giftlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::gift::{CreateGift, Gift, UpdateGift};

/// Column list shared across queries, qualified with the `gifts` alias so
/// the ownership joins can reuse it.
const COLUMNS: &str = "g.id, g.loved_one_id, g.event_id, g.name, g.description, g.price, \
                       g.purchased, g.purchase_date, g.store, g.url, g.notes, \
                       g.created_at, g.updated_at";

/// Ownership join fragment: restricts `g` to gifts whose loved one belongs
/// to a family owned by the bound user id.
const OWNER_JOIN: &str = "JOIN loved_ones l ON l.id = g.loved_one_id
                          JOIN families f ON f.id = l.family_id";

/// Provides owner-scoped CRUD operations for gifts.
pub struct GiftRepo;

impl GiftRepo {
    /// Insert a new gift idea for a loved one, returning the created row.
    /// Gifts always start unpurchased.
    ///
    /// Callers must have already verified ownership of the loved one.
    pub async fn create(
        pool: &PgPool,
        loved_one_id: DbId,
        input: &CreateGift,
    ) -> Result<Gift, sqlx::Error> {
        let query = format!(
            "INSERT INTO gifts AS g
                 (loved_one_id, event_id, name, description, price, store, url, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(loved_one_id)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.store)
            .bind(&input.url)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List a loved one's gifts, newest first (the order the person detail
    /// view and the suggestion context both use).
    pub async fn list_for_person(
        pool: &PgPool,
        loved_one_id: DbId,
    ) -> Result<Vec<Gift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gifts g
             WHERE g.loved_one_id = $1
             ORDER BY g.created_at DESC"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(loved_one_id)
            .fetch_all(pool)
            .await
    }

    /// Update a gift's mutable fields. Only non-`None` fields are applied.
    ///
    /// Owner-scoped: returns `None` when the gift does not exist or is not
    /// reachable through a family owned by the given user.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        owner_user_id: DbId,
        input: &UpdateGift,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts g SET
                event_id = COALESCE($3, g.event_id),
                name = COALESCE($4, g.name),
                description = COALESCE($5, g.description),
                price = COALESCE($6, g.price),
                store = COALESCE($7, g.store),
                url = COALESCE($8, g.url),
                notes = COALESCE($9, g.notes)
             FROM loved_ones l
             JOIN families f ON f.id = l.family_id
             WHERE g.id = $1 AND l.id = g.loved_one_id AND f.owner_user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(owner_user_id)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.store)
            .bind(&input.url)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Set the purchase state of a gift, stamping `purchase_date` when the
    /// gift becomes purchased and clearing it when the purchase is undone.
    ///
    /// Owner-scoped like [`update`](Self::update).
    pub async fn set_purchased(
        pool: &PgPool,
        id: DbId,
        owner_user_id: DbId,
        purchased: bool,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts g SET
                purchased = $3,
                purchase_date = CASE WHEN $3 THEN NOW() ELSE NULL END
             FROM loved_ones l
             JOIN families f ON f.id = l.family_id
             WHERE g.id = $1 AND l.id = g.loved_one_id AND f.owner_user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(owner_user_id)
            .bind(purchased)
            .fetch_optional(pool)
            .await
    }

    /// Find a gift by id through the ownership join.
    pub async fn find_owned(
        pool: &PgPool,
        id: DbId,
        owner_user_id: DbId,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM gifts g
             {OWNER_JOIN}
             WHERE g.id = $1 AND f.owner_user_id = $2"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(owner_user_id)
            .fetch_optional(pool)
            .await
    }
}
