use std::fmt;

use campus_types::parse_local_datetime;
use serde::Serialize;

use crate::{FieldParams, ValidationError, ValidationResult};

/// Describes an entity type's wire name, key and creatable fields.
///
/// The schema is what a generic endpoint set knows about an entity without
/// knowing its Rust type: create requests are checked against it before a
/// record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceSchema {
    /// Wire name, used in paths and error messages (e.g. `MenuItemReview`).
    pub entity: &'static str,
    /// JSON name of the key field.
    pub key_field: &'static str,
    pub key_kind: KeyKind,
    /// Fields a create request must supply, in declaration order.
    pub fields: &'static [FieldSpec],
}

impl ResourceSchema {
    /// Checks that every declared field is present and parses as its kind.
    ///
    /// Fails on the first offending field, in declaration order.
    pub fn validate(&self, params: &FieldParams) -> ValidationResult<()> {
        self.fields.iter().try_for_each(|field| field.check(params))
    }

    /// Looks up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Whether the key is assigned by the store or supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Numeric id drawn from a per-entity sequence on first save.
    Synthetic,
    /// Caller-supplied code, part of the create fields.
    Natural,
}

/// A single request field accepted on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn simple(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    /// Shorthand for a free-text field.
    pub const fn text(name: &'static str) -> Self {
        Self::simple(name, FieldKind::Text)
    }

    /// Shorthand for a 32-bit integer field.
    pub const fn int(name: &'static str) -> Self {
        Self::simple(name, FieldKind::Int)
    }

    /// Shorthand for a 64-bit integer field.
    pub const fn long(name: &'static str) -> Self {
        Self::simple(name, FieldKind::Long)
    }

    /// Shorthand for a boolean field.
    pub const fn bool(name: &'static str) -> Self {
        Self::simple(name, FieldKind::Bool)
    }

    /// Shorthand for an ISO-8601 local date-time field.
    pub const fn datetime(name: &'static str) -> Self {
        Self::simple(name, FieldKind::DateTime)
    }

    /// Shorthand for a caller-supplied natural key.
    pub const fn code(name: &'static str) -> Self {
        Self::simple(name, FieldKind::Code)
    }

    fn check(&self, params: &FieldParams) -> ValidationResult<()> {
        let raw = params.require(self.name)?;
        if self.kind.accepts(raw) {
            Ok(())
        } else {
            Err(ValidationError::invalid(self.name, raw, self.kind))
        }
    }
}

/// The data type of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Int,
    Long,
    Bool,
    DateTime,
    Code,
}

impl FieldKind {
    /// Returns true if `raw` parses as this kind.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Self::Text => true,
            Self::Int => raw.trim().parse::<i32>().is_ok(),
            Self::Long => raw.trim().parse::<i64>().is_ok(),
            Self::Bool => FieldParams::parse_flag(raw).is_some(),
            Self::DateTime => parse_local_datetime(raw).is_ok(),
            Self::Code => !raw.trim().is_empty(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Int => "int",
            Self::Long => "long",
            Self::Bool => "boolean",
            Self::DateTime => "ISO-8601 date-time",
            Self::Code => "non-blank code",
        };
        f.write_str(label)
    }
}
