//! Tuning values and pure bookkeeping for the ranking importer.

use std::time::Duration;

use serde::Serialize;

use crate::error::CoreError;

/// Stop importing once this many records have been committed in one run.
pub const DEFAULT_IMPORT_TARGET: usize = 1000;

/// Records requested per remote page.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Largest page size the ranking API accepts.
pub const MAX_PAGE_SIZE: u32 = 25;

/// Pause between consecutive page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);

/// Limits applied to a single import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    /// Upper bound on records committed per run.
    pub target: usize,
    /// Page size sent to the remote API as `limit`.
    pub page_size: u32,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            target: DEFAULT_IMPORT_TARGET,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ImportSettings {
    /// Reject settings the remote API or the loop cannot work with.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.target == 0 {
            return Err(CoreError::Validation(
                "import target must be at least 1".to_string(),
            ));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(CoreError::Validation(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }

    /// How many records from a page of `page_len` items may still be staged
    /// when `imported` records are already committed.
    pub fn records_to_take(&self, imported: usize, page_len: usize) -> usize {
        self.target.saturating_sub(imported).min(page_len)
    }

    /// Whether another page should be requested.
    pub fn wants_more(&self, imported: usize) -> bool {
        imported < self.target
    }
}

/// Outcome of a successful import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Records committed during this run.
    pub total_imported: usize,
    /// Remote pages requested during this run.
    pub pages_fetched: u32,
}
