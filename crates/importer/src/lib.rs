//! Ranking importer: pages through the remote character ranking and commits
//! each page into the character store.
//!
//! The remote side and the inter-page pause are both behind traits
//! ([`CharacterSource`], [`Throttle`]) so the loop can be driven without a
//! network or a wall clock.

pub mod error;
pub mod importer;
pub mod source;
pub mod throttle;

pub use error::ImportError;
pub use importer::{to_new_character, Importer};
pub use source::CharacterSource;
pub use throttle::{FixedDelay, Throttle};
