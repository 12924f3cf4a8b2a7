use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Body returned by a successful `GET /fetch_top_characters`.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub message: &'static str,
    pub total_characters: usize,
    pub pages_fetched: u32,
}

/// GET /fetch_top_characters
///
/// Runs a full ranking import and answers once it ends. With the default
/// settings this is up to 40 pages with a two second pause between them.
/// Pages committed before a failure stay in the store.
///
/// The run is a spawned task, so a client that disconnects early does not
/// stop it.
pub async fn fetch_top_characters(
    State(state): State<AppState>,
) -> AppResult<Json<ImportResponse>> {
    tracing::info!(
        base_url = %state.config.import.jikan_base_url,
        target = state.importer.settings().target,
        "Starting character import",
    );
    let importer = state.importer.clone();
    let pool = state.pool.clone();
    let summary = tokio::spawn(async move { importer.run(&pool).await }).await??;
    Ok(Json(ImportResponse {
        message: "Top characters added successfully!",
        total_characters: summary.total_imported,
        pages_fetched: summary.pages_fetched,
    }))
}
