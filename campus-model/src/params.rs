use std::collections::BTreeMap;

use campus_types::{ResourceKey, parse_local_datetime};
use chrono::NaiveDateTime;

use crate::{FieldKind, ValidationError, ValidationResult};

/// Request fields as received from the caller (query-string pairs).
///
/// When a name repeats, the first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldParams {
    values: BTreeMap<String, String>,
}

impl FieldParams {
    /// Creates an empty set of fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field unless one with the same name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_insert_with(|| value.into());
    }

    /// Returns the raw value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw value of a required field.
    pub fn require(&self, name: &str) -> ValidationResult<&str> {
        self.get(name)
            .ok_or_else(|| ValidationError::MissingField(name.to_string()))
    }

    /// Reads a free-text field.
    pub fn text(&self, name: &str) -> ValidationResult<String> {
        self.require(name).map(str::to_string)
    }

    /// Reads a 32-bit integer field.
    pub fn int(&self, name: &str) -> ValidationResult<i32> {
        let raw = self.require(name)?;
        raw.trim()
            .parse()
            .map_err(|_| ValidationError::invalid(name, raw, FieldKind::Int))
    }

    /// Reads a 64-bit integer field.
    pub fn long(&self, name: &str) -> ValidationResult<i64> {
        let raw = self.require(name)?;
        raw.trim()
            .parse()
            .map_err(|_| ValidationError::invalid(name, raw, FieldKind::Long))
    }

    /// Reads a boolean field (`true`/`false`, `on`/`off`, `yes`/`no`, `1`/`0`).
    pub fn flag(&self, name: &str) -> ValidationResult<bool> {
        let raw = self.require(name)?;
        Self::parse_flag(raw).ok_or_else(|| ValidationError::invalid(name, raw, FieldKind::Bool))
    }

    /// Reads an ISO-8601 local date-time field.
    pub fn datetime(&self, name: &str) -> ValidationResult<NaiveDateTime> {
        let raw = self.require(name)?;
        parse_local_datetime(raw)
            .map_err(|_| ValidationError::invalid(name, raw, FieldKind::DateTime))
    }

    /// Reads a record key of type `K`.
    pub fn key<K: ResourceKey>(&self, name: &str) -> ValidationResult<K> {
        let raw = self.require(name)?;
        K::parse_key(raw).map_err(|_| {
            let kind = if K::from_sequence(1).is_some() {
                FieldKind::Long
            } else {
                FieldKind::Code
            };
            ValidationError::invalid(name, raw, kind)
        })
    }

    pub(crate) fn parse_flag(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Some(true),
            "false" | "off" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
