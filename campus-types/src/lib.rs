//! Core type definitions for the campus API.
//!
//! This crate defines the entity-agnostic types used by every other crate:
//! - Record keys: synthetic numeric ids ([`RecordId`]) and natural string
//!   codes ([`Code`]), unified behind [`ResourceKey`]
//! - ISO-8601 local date-time parsing for request fields
//!
//! Entity records themselves live in `campus-model`.

mod ids;
mod timestamp;

pub use ids::{Code, RecordId, ResourceKey};
pub use timestamp::parse_local_datetime;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid key '{text}': {reason}")]
    InvalidKey { text: String, reason: String },

    #[error("invalid timestamp '{0}': expected ISO-8601 date-time like 2022-04-28T14:35:00")]
    InvalidTimestamp(String),
}
