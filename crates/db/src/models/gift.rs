//! Gift entity model and DTOs.

use giftlist_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `gifts` table.
///
/// Invariant (also enforced by a check constraint): `purchased = false`
/// implies `purchase_date` is null. The purchase date is stamped and cleared
/// server-side by [`crate::repositories::GiftRepo::set_purchased`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gift {
    pub id: DbId,
    pub loved_one_id: DbId,
    pub event_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub purchased: bool,
    pub purchase_date: Option<Timestamp>,
    pub store: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gift idea. Gifts always start unpurchased.
#[derive(Debug, Deserialize)]
pub struct CreateGift {
    pub event_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub store: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing gift. All fields are optional; the purchase
/// state is changed through the dedicated purchase toggle, not here.
#[derive(Debug, Deserialize)]
pub struct UpdateGift {
    pub event_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub store: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}
