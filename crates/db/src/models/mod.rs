//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where patching exists

pub mod budget_limit;
pub mod event;
pub mod family;
pub mod gift;
pub mod person;
pub mod session;
pub mod user;
