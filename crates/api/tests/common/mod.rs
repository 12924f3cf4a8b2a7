#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use charlearn_api::config::{ImportConfig, ServerConfig};
use charlearn_api::router::build_app_router;
use charlearn_api::state::AppState;
use charlearn_core::import::ImportSettings;
use charlearn_db::models::character::CreateCharacter;
use charlearn_db::DbPool;
use charlearn_importer::{CharacterSource, FixedDelay, Importer};
use charlearn_jikan::messages::{ImageSet, Images, Pagination, RankedCharacter, TopCharactersPage};
use charlearn_jikan::JikanError;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default),
/// no pause between import pages, and `static_dir` for static files.
pub fn test_config(static_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir,
        import: ImportConfig {
            jikan_base_url: "http://ranking.invalid".to_string(),
            settings: ImportSettings::default(),
            page_delay: Duration::ZERO,
        },
    }
}

/// Build the full application router over `pool`, importing from `source`.
///
/// Static files are served from a directory that does not exist.
pub fn build_test_app(pool: DbPool, source: Arc<dyn CharacterSource>) -> Router {
    build_test_app_with_static(pool, source, PathBuf::from("/nonexistent-static-dir"))
}

/// Like [`build_test_app`] but serving static files from `static_dir`.
pub fn build_test_app_with_static(
    pool: DbPool,
    source: Arc<dyn CharacterSource>,
    static_dir: PathBuf,
) -> Router {
    build_test_app_with(pool, source, test_config(static_dir))
}

/// Build the router from an explicit `config`, pausing
/// `config.import.page_delay` between import pages.
pub fn build_test_app_with(
    pool: DbPool,
    source: Arc<dyn CharacterSource>,
    config: ServerConfig,
) -> Router {
    let importer = Importer::new(
        source,
        Arc::new(FixedDelay(config.import.page_delay)),
        config.import.settings.clone(),
    );
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        importer,
    };
    build_app_router(state, &config)
}

/// Send a GET request to `uri` and return the response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn new_character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        jap_name: Some("N/A".to_string()),
        rom_name: Some("N/A".to_string()),
        img_url: "https://cdn.example.test/img.jpg".to_string(),
    }
}

pub fn ranked(name: &str) -> RankedCharacter {
    RankedCharacter {
        name: name.to_string(),
        name_kanji: None,
        name_english: None,
        images: Images {
            jpg: ImageSet {
                image_url: format!("https://cdn.example.test/{name}.jpg"),
            },
        },
    }
}

pub fn page_of(count: usize, offset: usize, has_next_page: bool) -> TopCharactersPage {
    TopCharactersPage {
        data: (0..count)
            .map(|i| ranked(&format!("Character {}", offset + i)))
            .collect(),
        pagination: Pagination { has_next_page },
    }
}

/// Serves pre-built responses in order and counts requests.
pub struct ScriptedSource {
    responses: Mutex<Vec<Result<TopCharactersPage, JikanError>>>,
    calls: Mutex<u32>,
}

impl ScriptedSource {
    pub fn new(mut responses: Vec<Result<TopCharactersPage, JikanError>>) -> Arc<Self> {
        responses.reverse();
        Arc::new(Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(0),
        })
    }

    /// A source that must never be called.
    pub fn unused() -> Arc<Self> {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl CharacterSource for ScriptedSource {
    async fn fetch_page(&self, _page: u32, _limit: u32) -> Result<TopCharactersPage, JikanError> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop()
            .expect("source asked for more pages than scripted")
    }
}
