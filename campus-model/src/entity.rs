use std::fmt;

use campus_types::ResourceKey;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{FieldParams, ResourceSchema, ValidationResult};

/// A flat record type exposed through a generic endpoint set.
///
/// Implementors are plain data: a key plus scalar attributes, serialized
/// with camelCase field names. Everything the endpoint set and the record
/// store need to know about the type is reachable from here.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Key type: [`campus_types::RecordId`] or [`campus_types::Code`].
    type Key: ResourceKey;

    /// Wire name, key and create fields.
    const SCHEMA: ResourceSchema;

    /// Wire name of the entity (e.g. `MenuItemReview`).
    fn name() -> &'static str {
        Self::SCHEMA.entity
    }

    fn key(&self) -> &Self::Key;

    fn set_key(&mut self, key: Self::Key);

    /// Builds an unsaved record from create-request fields.
    ///
    /// Synthetic keys are left unassigned for the store to fill in.
    fn from_params(params: &FieldParams) -> ValidationResult<Self>;

    /// Copies every attribute of `incoming` onto `self`, keeping the key.
    fn apply_update(&mut self, incoming: Self) {
        let key = self.key().clone();
        *self = incoming;
        self.set_key(key);
    }
}
