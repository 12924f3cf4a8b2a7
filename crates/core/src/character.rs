//! Character naming rules and search limits.

/// Stored in place of a kanji or English name the ranking API did not supply.
pub const NAME_PLACEHOLDER: &str = "N/A";

/// Maximum number of rows a substring search may return.
pub const SEARCH_RESULT_LIMIT: i64 = 5;

/// Resolve an optional remote name to the value persisted in the store.
///
/// Both an absent field and an explicit `null` become [`NAME_PLACEHOLDER`].
pub fn name_or_placeholder(name: Option<String>) -> String {
    name.unwrap_or_else(|| NAME_PLACEHOLDER.to_string())
}

/// Cap a caller-supplied search limit to [`SEARCH_RESULT_LIMIT`].
///
/// Non-positive values fall back to the cap as well.
pub fn clamp_search_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(n) if n > 0 => n.min(SEARCH_RESULT_LIMIT),
        _ => SEARCH_RESULT_LIMIT,
    }
}
