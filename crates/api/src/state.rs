use std::sync::Arc;

use giftlist_ai::CompletionProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The completion provider is held behind its capability trait so
/// tests can substitute their own implementation.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: giftlist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Chat-completion provider used by the suggestion endpoint.
    pub completion: Arc<dyn CompletionProvider>,
}
