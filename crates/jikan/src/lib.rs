//! Client for the Jikan (MyAnimeList) REST API.
//!
//! Only the character ranking endpoint is wrapped: [`api::JikanApi`] fetches
//! one page of `/top/characters` and decodes it into [`messages`] types.

pub mod api;
pub mod messages;

pub use api::{JikanApi, JikanError, DEFAULT_BASE_URL};
