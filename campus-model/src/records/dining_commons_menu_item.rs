use campus_types::RecordId;
use serde::{Deserialize, Serialize};

use crate::{FieldParams, FieldSpec, KeyKind, Resource, ResourceSchema, ValidationResult};

/// A dish served at a station of a dining commons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsMenuItem {
    #[serde(default)]
    pub id: RecordId,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Resource for DiningCommonsMenuItem {
    type Key = RecordId;

    const SCHEMA: ResourceSchema = ResourceSchema {
        entity: "UCSBDiningCommonsMenuItem",
        key_field: "id",
        key_kind: KeyKind::Synthetic,
        fields: &[
            FieldSpec::text("diningCommonsCode"),
            FieldSpec::text("name"),
            FieldSpec::text("station"),
        ],
    };

    fn key(&self) -> &RecordId {
        &self.id
    }

    fn set_key(&mut self, key: RecordId) {
        self.id = key;
    }

    fn from_params(params: &FieldParams) -> ValidationResult<Self> {
        Ok(Self {
            id: RecordId::UNASSIGNED,
            dining_commons_code: params.text("diningCommonsCode")?,
            name: params.text("name")?,
            station: params.text("station")?,
        })
    }
}
