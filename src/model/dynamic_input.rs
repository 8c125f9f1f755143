//! Entities and answers for forms whose fields are supplied at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicInputEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub name: String,
    pub fields: Vec<DynamicInputField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicInputField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nested: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<DynamicInputField>,
    /// Allowed values. Empty means free text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Answers given for one field. Not checked against any entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicInputAnswer {
    pub id: String,
    #[serde(rename = "type")]
    pub answer_type: String,
    pub name: String,
    pub answers: Vec<String>,
}

impl DynamicInputEntity {
    /// Finds a field by id, searching nested fields depth-first.
    pub fn find_field(&self, id: &str) -> Option<&DynamicInputField> {
        self.fields.iter().find_map(|field| field.find(id))
    }
}

impl DynamicInputField {
    fn find(&self, id: &str) -> Option<&DynamicInputField> {
        if self.id == id {
            return Some(self);
        }
        self.fields.iter().find_map(|field| field.find(id))
    }

    /// Whether `option` is an accepted answer for this field.
    pub fn allows(&self, option: &str) -> bool {
        self.options.is_empty() || self.options.iter().any(|o| o == option)
    }
}
