//! Shared types, constants, and pure logic for the Character Learner backend.
//!
//! Nothing in this crate performs I/O; the database, remote client, and HTTP
//! layers all build on it.

pub mod character;
pub mod error;
pub mod import;
pub mod types;
