//! Query parameter types for API handlers.

use serde::Deserialize;

/// Parameters for `GET /search_characters`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to look for in any of the three name fields.
    pub character: Option<String>,
    /// Optional smaller cap; never raises the result count above five.
    pub limit: Option<i64>,
}
