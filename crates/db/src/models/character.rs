//! Character entity model and DTOs.

use charlearn_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `characters` table.
///
/// Serializes to the `{id, name, jap_name, rom_name, img_url}` shape the
/// frontend consumes.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub jap_name: Option<String>,
    pub rom_name: Option<String>,
    pub img_url: String,
}

/// DTO for staging a new character. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub jap_name: Option<String>,
    pub rom_name: Option<String>,
    pub img_url: String,
}
