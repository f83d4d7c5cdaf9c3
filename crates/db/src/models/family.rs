//! Family entity model and DTOs.
//!
//! A family is the ownership boundary: every loved one, event, gift, and
//! budget limit is reachable only through a family owned by the requesting
//! user.

use giftlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `families` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Family {
    pub id: DbId,
    pub name: String,
    pub owner_user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new family. The owner comes from the authenticated
/// user, never from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateFamily {
    pub name: String,
}
