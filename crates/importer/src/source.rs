use async_trait::async_trait;
use charlearn_jikan::messages::TopCharactersPage;
use charlearn_jikan::{JikanApi, JikanError};

/// Anything that can serve pages of the character ranking.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch 1-based page `page` holding at most `limit` characters.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<TopCharactersPage, JikanError>;
}

#[async_trait]
impl CharacterSource for JikanApi {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<TopCharactersPage, JikanError> {
        self.top_characters(page, limit).await
    }
}
