//! Query and reset handlers for stored characters.
//!
//! Search and list are pure reads over the character store; reset empties
//! it.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use charlearn_core::character::clamp_search_limit;
use charlearn_core::error::CoreError;
use charlearn_db::models::character::Character;
use charlearn_db::repositories::CharacterRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::state::AppState;

/// Body returned by `GET /clear_database`.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: &'static str,
}

/// GET /search_characters?character=<substring>
///
/// Returns at most five characters whose name, kanji name, or English name
/// contains `character` (case-sensitive). An empty value matches every
/// character; a missing parameter or an unparsable `limit` is rejected with
/// 400.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<Character>>> {
    let Query(params) = params.map_err(|e| CoreError::Validation(e.body_text()))?;
    let text = params.character.ok_or_else(|| {
        CoreError::Validation("query parameter `character` is required".to_string())
    })?;
    let limit = clamp_search_limit(params.limit);

    let results = CharacterRepo::find_by_substring(&state.pool, &text, limit).await?;

    tracing::debug!(character = %text, results = results.len(), "Search executed");

    Ok(Json(results))
}

/// GET /list_all_characters
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_all(&state.pool)
        .await
        .map_err(AppError::ListCharacters)?;
    Ok(Json(characters))
}

/// GET /clear_database
///
/// Irreversibly deletes every stored character.
pub async fn clear(State(state): State<AppState>) -> AppResult<Json<ClearResponse>> {
    let removed = CharacterRepo::reset(&state.pool).await?;
    tracing::info!(removed, "Database cleared");
    Ok(Json(ClearResponse {
        message: "Database cleared and reinitialized.",
    }))
}
