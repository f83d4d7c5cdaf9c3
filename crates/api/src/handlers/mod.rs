//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod budget_limit;
pub mod chat;
pub mod event;
pub mod family;
pub mod gift;
pub mod person;
