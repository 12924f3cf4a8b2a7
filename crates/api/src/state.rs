use std::sync::Arc;

use charlearn_importer::Importer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Character store connection pool.
    pub pool: charlearn_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Ranking importer used by `/fetch_top_characters`.
    pub importer: Importer,
}
