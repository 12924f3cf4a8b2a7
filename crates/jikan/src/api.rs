//! REST client for the Jikan character ranking.
//!
//! Wraps `GET /top/characters?page=&limit=` using [`reqwest`]. Transport
//! failures, non-2xx statuses, and undecodable bodies are reported as
//! distinct [`JikanError`] variants so callers can tell a flaky network from
//! a payload that no longer matches [`TopCharactersPage`].

use serde_json::error::Category;

use crate::messages::TopCharactersPage;

/// Public Jikan v4 base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// HTTP client for the Jikan API.
#[derive(Clone)]
pub struct JikanApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the Jikan REST layer.
#[derive(Debug, thiserror::Error)]
pub enum JikanError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Jikan answered with a non-2xx status code.
    #[error("Jikan API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was JSON but not a ranking page, typically because an
    /// expected field was absent.
    #[error("{0}")]
    MissingField(String),

    /// The body was not JSON at all (HTML error page, truncated stream).
    #[error("invalid JSON body: {0}")]
    Decode(String),
}

impl JikanError {
    /// Whether the failure came from the payload rather than the transport.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, JikanError::MissingField(_))
    }
}

impl JikanApi {
    /// Create a client for the given base URL, e.g. [`DEFAULT_BASE_URL`].
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of the character ranking.
    ///
    /// `page` is 1-based; `limit` is the page size requested from Jikan.
    pub async fn top_characters(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<TopCharactersPage, JikanError> {
        tracing::debug!(page, limit, base_url = %self.base_url, "Requesting top characters");

        let response = self
            .client
            .get(format!("{}/top/characters", self.base_url))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        Self::decode_page(&body)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`JikanError::Status`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, JikanError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(JikanError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Only shape mismatches in well-formed JSON count as a malformed
    /// payload; syntax errors and early EOF are reported as [`JikanError::Decode`].
    fn decode_page(body: &str) -> Result<TopCharactersPage, JikanError> {
        serde_json::from_str(body).map_err(|e| match e.classify() {
            Category::Data => JikanError::MissingField(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                JikanError::Decode(e.to_string())
            }
        })
    }
}
