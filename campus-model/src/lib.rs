//! Entity model for the campus API.
//!
//! Defines the types every endpoint set is generic over:
//! - [`Resource`]: a flat record type with a key, a field schema and a
//!   constructor from request fields
//! - [`ResourceSchema`]: the entity's wire name, key and field kinds
//! - [`FieldParams`]: request fields as received, with typed accessors
//! - [`ValidationError`]: a missing or malformed field
//!
//! The concrete records ([`MenuItemReview`], [`DiningCommonsMenuItem`],
//! [`Organization`], [`Article`]) live in [`records`].

mod entity;
mod error;
mod params;
mod schema;
pub mod records;

pub use entity::Resource;
pub use error::{ValidationError, ValidationResult};
pub use params::FieldParams;
pub use records::{Article, DiningCommonsMenuItem, MenuItemReview, Organization};
pub use schema::{FieldKind, FieldSpec, KeyKind, ResourceSchema};
