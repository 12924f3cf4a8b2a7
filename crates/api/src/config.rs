use std::path::PathBuf;
use std::time::Duration;

use charlearn_core::import::{
    ImportSettings, DEFAULT_IMPORT_TARGET, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE,
};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5001`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://characters.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`). Does not apply to
    /// `/fetch_top_characters`.
    pub request_timeout_secs: u64,
    /// Directory holding the frontend build (default: `../frontend/build`).
    pub static_dir: PathBuf,
    /// Remote ranking import settings.
    pub import: ImportConfig,
}

/// Settings for the ranking importer.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Jikan base URL (default: `https://api.jikan.moe/v4`).
    pub jikan_base_url: String,
    /// Records per run and per page.
    pub settings: ImportSettings,
    /// Pause between page requests (default: 2 seconds).
    pub page_delay: Duration,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            jikan_base_url: charlearn_jikan::DEFAULT_BASE_URL.to_string(),
            settings: ImportSettings::default(),
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                      |
    /// |------------------------|------------------------------|
    /// | `HOST`                 | `0.0.0.0`                    |
    /// | `PORT`                 | `5001`                       |
    /// | `DATABASE_URL`         | `sqlite://characters.db`     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                         |
    /// | `STATIC_DIR`           | `../frontend/build`          |
    /// | `JIKAN_BASE_URL`       | `https://api.jikan.moe/v4`   |
    /// | `IMPORT_TARGET`        | `1000`                       |
    /// | `IMPORT_PAGE_SIZE`     | `25`                         |
    /// | `IMPORT_PAGE_DELAY_MS` | `2000`                       |
    ///
    /// Panics on unparsable numeric values so misconfiguration fails at
    /// start-up.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "5001")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = env_or("DATABASE_URL", "sqlite://characters.db");

        let cors_origins = parse_origins(&env_or("CORS_ORIGINS", "http://localhost:3000"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = PathBuf::from(env_or("STATIC_DIR", "../frontend/build"));

        let jikan_base_url = env_or("JIKAN_BASE_URL", charlearn_jikan::DEFAULT_BASE_URL);

        let target: usize = env_or("IMPORT_TARGET", &DEFAULT_IMPORT_TARGET.to_string())
            .parse()
            .expect("IMPORT_TARGET must be a valid usize");

        let page_size: u32 = env_or("IMPORT_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("IMPORT_PAGE_SIZE must be a valid u32");

        let page_delay_ms: u64 = env_or(
            "IMPORT_PAGE_DELAY_MS",
            &DEFAULT_PAGE_DELAY.as_millis().to_string(),
        )
        .parse()
        .expect("IMPORT_PAGE_DELAY_MS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            static_dir,
            import: ImportConfig {
                jikan_base_url,
                settings: ImportSettings { target, page_size },
                page_delay: Duration::from_millis(page_delay_ms),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
