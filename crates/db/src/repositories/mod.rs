//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument.

pub mod character_repo;

pub use character_repo::{CharacterBatch, CharacterRepo};
