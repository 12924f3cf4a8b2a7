//! HTTP-level integration tests for `GET /fetch_top_characters`.
//!
//! The importer is wired to a scripted source, so no network traffic and no
//! inter-page pauses happen.

mod common;

use std::path::PathBuf;
use std::time::Duration;

use axum::http::StatusCode;
use charlearn_db::open_in_memory;
use charlearn_db::repositories::CharacterRepo;
use charlearn_db::DbPool;
use charlearn_jikan::JikanError;
use common::{
    body_json, build_test_app, build_test_app_with, get, page_of, test_config, ScriptedSource,
};

/// Four full pages, the last one without a next page.
fn four_pages() -> std::sync::Arc<ScriptedSource> {
    ScriptedSource::new(vec![
        Ok(page_of(25, 0, true)),
        Ok(page_of(25, 25, true)),
        Ok(page_of(25, 50, true)),
        Ok(page_of(25, 75, false)),
    ])
}

/// Poll the store until it holds `expected` rows or `deadline` passes.
async fn wait_for_count(pool: &DbPool, expected: i64, deadline: Duration) -> i64 {
    let started = tokio::time::Instant::now();
    loop {
        let count = CharacterRepo::count(pool).await.unwrap();
        if count == expected || started.elapsed() >= deadline {
            return count;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

// ---------------------------------------------------------------------------
// Test: single short page imports and reports its size
// ---------------------------------------------------------------------------

#[tokio::test]
async fn import_stops_on_last_page_and_reports_total() {
    let pool = open_in_memory().await.unwrap();
    let source = ScriptedSource::new(vec![Ok(page_of(10, 0, false))]);
    let app = build_test_app(pool.clone(), source.clone());

    let response = get(app, "/fetch_top_characters").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Top characters added successfully!");
    assert_eq!(json["total_characters"], 10);
    assert_eq!(json["pages_fetched"], 1);
    assert_eq!(source.calls(), 1);
    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 10);
}

// ---------------------------------------------------------------------------
// Test: reported total equals list growth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn total_characters_matches_list_growth() {
    let pool = open_in_memory().await.unwrap();
    let source = ScriptedSource::new(vec![
        Ok(page_of(25, 0, true)),
        Ok(page_of(25, 25, true)),
        Ok(page_of(3, 50, false)),
    ]);
    let app = build_test_app(pool, source);

    let before = body_json(get(app.clone(), "/list_all_characters").await).await;
    assert_eq!(before.as_array().unwrap().len(), 0);

    let json = body_json(get(app.clone(), "/fetch_top_characters").await).await;
    assert_eq!(json["total_characters"], 53);

    let after = body_json(get(app, "/list_all_characters").await).await;
    assert_eq!(after.as_array().unwrap().len(), 53);
}

// ---------------------------------------------------------------------------
// Test: imported characters get the placeholder names
// ---------------------------------------------------------------------------

#[tokio::test]
async fn imported_characters_without_names_use_placeholder() {
    let pool = open_in_memory().await.unwrap();
    let source = ScriptedSource::new(vec![Ok(page_of(1, 0, false))]);
    let app = build_test_app(pool, source);

    get(app.clone(), "/fetch_top_characters").await;

    let json = body_json(get(app, "/list_all_characters").await).await;
    assert_eq!(json[0]["name"], "Character 0");
    assert_eq!(json[0]["jap_name"], "N/A");
    assert_eq!(json[0]["rom_name"], "N/A");
    assert_eq!(json[0]["img_url"], "https://cdn.example.test/Character 0.jpg");
}

// ---------------------------------------------------------------------------
// Test: transport failure maps to 500 and keeps earlier pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn remote_failure_returns_500_and_keeps_committed_pages() {
    let pool = open_in_memory().await.unwrap();
    let source = ScriptedSource::new(vec![
        Ok(page_of(25, 0, true)),
        Err(JikanError::Status {
            status: 429,
            body: "Too Many Requests".to_string(),
        }),
    ]);
    let app = build_test_app(pool.clone(), source);

    let response = get(app, "/fetch_top_characters").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "FETCH_FAILED");
    let message = json["message"].as_str().unwrap();
    assert!(
        message.starts_with("Error fetching characters data:"),
        "unexpected message: {message}"
    );
    assert!(message.contains("429"));

    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 25);
}

// ---------------------------------------------------------------------------
// Test: malformed payload maps to a key error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_payload_returns_key_error() {
    let pool = open_in_memory().await.unwrap();
    let source = ScriptedSource::new(vec![Err(JikanError::MissingField(
        "missing field `images` at line 1 column 20".to_string(),
    ))]);
    let app = build_test_app(pool.clone(), source);

    let response = get(app, "/fetch_top_characters").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "KEY_ERROR");
    let message = json["message"].as_str().unwrap();
    assert!(message.starts_with("Key error:"), "unexpected message: {message}");
    assert!(message.contains("images"));

    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Test: an import longer than the request timeout still completes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn import_is_not_cut_off_by_request_timeout() {
    let pool = open_in_memory().await.unwrap();
    let mut config = test_config(PathBuf::from("/nonexistent-static-dir"));
    config.request_timeout_secs = 1;
    config.import.page_delay = Duration::from_millis(600);
    let app = build_test_app_with(pool.clone(), four_pages(), config);

    // Three pauses of 600 ms outlast the one second timeout.
    let response = get(app, "/fetch_top_characters").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_characters"], 100);
    assert_eq!(json["pages_fetched"], 4);
    assert_eq!(CharacterRepo::count(&pool).await.unwrap(), 100);
}

// ---------------------------------------------------------------------------
// Test: dropping the request does not stop a running import
// ---------------------------------------------------------------------------

#[tokio::test]
async fn abandoned_request_lets_import_finish() {
    let pool = open_in_memory().await.unwrap();
    let mut config = test_config(PathBuf::from("/nonexistent-static-dir"));
    config.import.page_delay = Duration::from_millis(200);
    let app = build_test_app_with(pool.clone(), four_pages(), config);

    let abandoned = tokio::time::timeout(
        Duration::from_millis(100),
        get(app, "/fetch_top_characters"),
    )
    .await;
    assert!(abandoned.is_err(), "import answered before the client gave up");

    let count = wait_for_count(&pool, 100, Duration::from_secs(5)).await;
    assert_eq!(count, 100);
}
