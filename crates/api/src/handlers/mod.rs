//! Request handlers.
//!
//! Handlers delegate to `charlearn_db` repositories or the importer and map
//! errors via [`AppError`](crate::error::AppError).

pub mod characters;
pub mod import;
