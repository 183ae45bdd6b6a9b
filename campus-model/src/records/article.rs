use campus_types::RecordId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{FieldParams, FieldSpec, KeyKind, Resource, ResourceSchema, ValidationResult};

/// A link to an article shared with the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    pub url: String,
    pub explanation: String,
    /// Submitter's email.
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Resource for Article {
    type Key = RecordId;

    const SCHEMA: ResourceSchema = ResourceSchema {
        entity: "Article",
        key_field: "id",
        key_kind: KeyKind::Synthetic,
        fields: &[
            FieldSpec::text("title"),
            FieldSpec::text("url"),
            FieldSpec::text("explanation"),
            FieldSpec::text("email"),
            FieldSpec::datetime("dateAdded"),
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
            title: params.text("title")?,
            url: params.text("url")?,
            explanation: params.text("explanation")?,
            email: params.text("email")?,
            date_added: params.datetime("dateAdded")?,
        })
    }
}
