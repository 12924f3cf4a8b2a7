pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers::{characters, import};
use crate::state::AppState;

/// Read and reset routes over the character store, mounted at the root.
///
/// ```text
/// GET /search_characters?character=...      substring search (max 5)
/// GET /list_all_characters                  every stored character
/// GET /clear_database                       empty the store
/// ```
pub fn character_routes() -> Router<AppState> {
    Router::new()
        .route("/search_characters", get(characters::search))
        .route("/list_all_characters", get(characters::list_all))
        .route("/clear_database", get(characters::clear))
}

/// Import route, mounted at the root outside the request timeout.
///
/// ```text
/// GET /fetch_top_characters                 import the remote ranking
/// ```
pub fn import_routes() -> Router<AppState> {
    Router::new().route("/fetch_top_characters", get(import::fetch_top_characters))
}
