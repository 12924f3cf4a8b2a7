//! The page-by-page import loop.

use std::sync::Arc;

use charlearn_core::character::name_or_placeholder;
use charlearn_core::import::{ImportSettings, ImportSummary};
use charlearn_db::models::character::CreateCharacter;
use charlearn_db::repositories::CharacterRepo;
use charlearn_db::DbPool;
use charlearn_jikan::messages::RankedCharacter;

use crate::error::ImportError;
use crate::source::CharacterSource;
use crate::throttle::Throttle;

/// Map a ranked character from the remote API to a store record.
///
/// Absent kanji and English names are stored as the `"N/A"` placeholder.
pub fn to_new_character(item: RankedCharacter) -> CreateCharacter {
    let img_url = item.image_url().to_string();
    CreateCharacter {
        name: item.name,
        jap_name: Some(name_or_placeholder(item.name_kanji)),
        rom_name: Some(name_or_placeholder(item.name_english)),
        img_url,
    }
}

/// Imports the remote character ranking into the store.
///
/// Cheap to clone; the source and throttle are shared.
#[derive(Clone)]
pub struct Importer {
    source: Arc<dyn CharacterSource>,
    throttle: Arc<dyn Throttle>,
    settings: ImportSettings,
}

impl Importer {
    pub fn new(
        source: Arc<dyn CharacterSource>,
        throttle: Arc<dyn Throttle>,
        settings: ImportSettings,
    ) -> Self {
        Self {
            source,
            throttle,
            settings,
        }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Run one import.
    ///
    /// Requests pages starting at 1 until `settings.target` records have
    /// been committed or the remote reports no further pages. Each page is
    /// committed as its own transaction, and the throttle is awaited between
    /// consecutive requests. The first failure aborts the run; pages already
    /// committed are kept. An empty page ends the run as well.
    pub async fn run(&self, pool: &DbPool) -> Result<ImportSummary, ImportError> {
        let mut total_imported = 0usize;
        let mut page = 1u32;
        let mut pages_fetched = 0u32;

        while self.settings.wants_more(total_imported) {
            let response = match self.source.fetch_page(page, self.settings.page_size).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        page,
                        total_imported,
                        error = %e,
                        "Import aborted while fetching page",
                    );
                    return Err(e.into());
                }
            };
            pages_fetched += 1;

            let has_next_page = response.pagination.has_next_page;
            let take = self
                .settings
                .records_to_take(total_imported, response.data.len());

            let mut batch = CharacterRepo::begin(pool).await?;
            for item in response.data.into_iter().take(take) {
                tracing::trace!(name = %item.name, "Staging character");
                batch.create(&to_new_character(item)).await?;
            }
            let added = batch.commit().await?;
            total_imported += added;

            tracing::debug!(page, added, total_imported, "Committed page");

            if !has_next_page {
                tracing::debug!(page, "Remote reports no further pages");
                break;
            }
            // An empty page would otherwise be requested forever.
            if added == 0 {
                tracing::warn!(page, "Remote returned an empty page, stopping import");
                break;
            }
            if !self.settings.wants_more(total_imported) {
                break;
            }

            page += 1;
            self.throttle.pause().await;
        }

        tracing::info!(total_imported, pages_fetched, "Character import finished");

        Ok(ImportSummary {
            total_imported,
            pages_fetched,
        })
    }
}
