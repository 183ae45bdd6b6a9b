//! Identifier types used throughout the campus API.
//!
//! Entities are keyed either by a store-assigned number or by a natural
//! code the caller supplies. Both render as plain JSON scalars.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::{Error, Result};

/// Behaviour shared by every record key type.
///
/// A key is parsed from request text, printed into messages, and may be
/// assigned by the store when the record is first saved.
pub trait ResourceKey:
    Clone
    + PartialEq
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Parses a key from the text of a request parameter.
    fn parse_key(text: &str) -> Result<Self>;

    /// Returns false while the key still awaits assignment by the store.
    fn is_assigned(&self) -> bool;

    /// Builds a key from a store sequence value.
    ///
    /// Natural keys are never generated and return `None`.
    fn from_sequence(value: i64) -> Option<Self>;

    /// Returns the sequence value this key occupies, if it is numeric.
    fn sequence_value(&self) -> Option<i64>;
}

/// Synthetic numeric identifier assigned by the record store.
///
/// `0` marks a record that has not been saved yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// The placeholder id carried by unsaved records.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates a record id from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse::<i64>().map(Self).map_err(|e| Error::InvalidKey {
            text: s.to_string(),
            reason: e.to_string(),
        })
    }
}

impl ResourceKey for RecordId {
    fn parse_key(text: &str) -> Result<Self> {
        text.parse()
    }

    fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    fn from_sequence(value: i64) -> Option<Self> {
        Some(Self(value))
    }

    fn sequence_value(&self) -> Option<i64> {
        Some(self.0)
    }
}

/// Natural string key supplied by the caller, e.g. an organization code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// Creates a code from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the code text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(Error::InvalidKey {
                text: s.to_string(),
                reason: "code must not be blank".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}

impl ResourceKey for Code {
    fn parse_key(text: &str) -> Result<Self> {
        text.parse()
    }

    fn is_assigned(&self) -> bool {
        !self.0.trim().is_empty()
    }

    fn from_sequence(_value: i64) -> Option<Self> {
        None
    }

    fn sequence_value(&self) -> Option<i64> {
        None
    }
}
