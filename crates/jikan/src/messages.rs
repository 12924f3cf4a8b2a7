//! Wire types for the `/top/characters` response.
//!
//! Only the fields the importer reads are modelled; everything else in the
//! payload is ignored. Required fields are plain types so a payload missing
//! one fails to decode with serde's `missing field` message.

use serde::Deserialize;

/// One page of the character ranking.
#[derive(Debug, Clone, Deserialize)]
pub struct TopCharactersPage {
    pub data: Vec<RankedCharacter>,
    pub pagination: Pagination,
}

/// A single ranked character.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedCharacter {
    pub name: String,
    /// Native-script name. Absent or `null` for many characters.
    #[serde(default)]
    pub name_kanji: Option<String>,
    /// English name, when MyAnimeList records one separately.
    #[serde(default)]
    pub name_english: Option<String>,
    pub images: Images,
}

impl RankedCharacter {
    /// URL of the JPEG portrait.
    pub fn image_url(&self) -> &str {
        &self.images.jpg.image_url
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Images {
    pub jpg: ImageSet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSet {
    pub image_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub has_next_page: bool,
}
