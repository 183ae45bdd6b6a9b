use campus_types::RecordId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{FieldParams, FieldSpec, KeyKind, Resource, ResourceSchema, ValidationResult};

/// A diner's review of a single dining-commons menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: RecordId,
    /// Id of the reviewed `UCSBDiningCommonsMenuItem`. Not checked against that store.
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Resource for MenuItemReview {
    type Key = RecordId;

    const SCHEMA: ResourceSchema = ResourceSchema {
        entity: "MenuItemReview",
        key_field: "id",
        key_kind: KeyKind::Synthetic,
        fields: &[
            FieldSpec::long("itemId"),
            FieldSpec::text("reviewerEmail"),
            FieldSpec::int("stars"),
            FieldSpec::datetime("dateReviewed"),
            FieldSpec::text("comments"),
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
            item_id: params.long("itemId")?,
            reviewer_email: params.text("reviewerEmail")?,
            stars: params.int("stars")?,
            date_reviewed: params.datetime("dateReviewed")?,
            comments: params.text("comments")?,
        })
    }
}
