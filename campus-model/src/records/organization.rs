use campus_types::Code;
use serde::{Deserialize, Serialize};

use crate::{FieldParams, FieldSpec, KeyKind, Resource, ResourceSchema, ValidationResult};

/// A student organization, keyed by its registrar code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default)]
    pub org_code: Code,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Resource for Organization {
    type Key = Code;

    const SCHEMA: ResourceSchema = ResourceSchema {
        entity: "UCSBOrganization",
        key_field: "orgCode",
        key_kind: KeyKind::Natural,
        fields: &[
            FieldSpec::code("orgCode"),
            FieldSpec::text("orgTranslationShort"),
            FieldSpec::text("orgTranslation"),
            FieldSpec::bool("inactive"),
        ],
    };

    fn key(&self) -> &Code {
        &self.org_code
    }

    fn set_key(&mut self, key: Code) {
        self.org_code = key;
    }

    fn from_params(params: &FieldParams) -> ValidationResult<Self> {
        Ok(Self {
            org_code: params.key("orgCode")?,
            org_translation_short: params.text("orgTranslationShort")?,
            org_translation: params.text("orgTranslation")?,
            inactive: params.flag("inactive")?,
        })
    }
}
