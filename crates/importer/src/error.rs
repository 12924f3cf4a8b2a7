use charlearn_jikan::JikanError;

/// Reasons an import run stops early.
///
/// Pages committed before the failure stay committed.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The ranking API could not be reached or returned an unusable page.
    #[error(transparent)]
    Remote(#[from] JikanError),

    /// Staging or committing a page failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ImportError {
    /// Whether the run stopped because a page lacked an expected field.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, ImportError::Remote(e) if e.is_malformed_payload())
    }
}
