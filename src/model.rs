//! Function definitions as they travel over the wire.
//!
//! DESIGN
//! ======
//! `FunctionRecord` is the unit of management: the API stores and returns it
//! whole, keyed by `id`. `NewFunction` is the operator-editable subset that a
//! form works on; the store turns it into a record by stamping identity and
//! metadata. Parameters are plain values owned by their record.
//!
//! Fields the console does not know about are kept in `extra` on both the
//! record and its parameters and written back unchanged on update. Explicit
//! `null` reads as the field's default.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

fn default_enabled() -> bool {
    true
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn null_as_enabled<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(|enabled| enabled.unwrap_or(true))
}

// =============================================================================
// PARAMETER
// =============================================================================

/// One argument in a function's parameter schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Allowed values, in display order. Empty means unconstrained.
    #[serde(rename = "enum", default, deserialize_with = "null_as_default")]
    pub enum_values: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,
    /// Server-side fields passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Parameter {
    /// A parameter is submittable once name, type and description are all set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.kind.is_empty() && !self.description.is_empty()
    }

    /// Split a comma-separated enum entry into values, dropping blanks.
    #[must_use]
    pub fn parse_enum_list(text: &str) -> Vec<String> {
        text.split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// The enum values as a single comma-separated entry.
    #[must_use]
    pub fn enum_list_text(&self) -> String {
        self.enum_values.join(",")
    }
}

// =============================================================================
// NEW FUNCTION
// =============================================================================

/// The editable part of a function definition, before identity and metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFunction {
    pub name: String,
    pub description: String,
    pub lambda_function: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl Default for NewFunction {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            lambda_function: String::new(),
            enabled: true,
            parameters: Vec::new(),
        }
    }
}

// =============================================================================
// FUNCTION RECORD
// =============================================================================

/// A persisted function definition as returned by `GET /api/functions`.
///
/// Metadata fields are server-style values stamped by the store; they are
/// optional on read so records written by other tools still decode.
/// Only `id` is mandatory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lambda_function: String,
    #[serde(default = "default_enabled", deserialize_with = "null_as_enabled")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    /// Server-side fields passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FunctionRecord {
    /// Build a record with no metadata from an editable draft.
    #[must_use]
    pub fn from_draft(id: String, draft: NewFunction) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            lambda_function: draft.lambda_function,
            enabled: draft.enabled,
            parameters: draft.parameters,
            created_by: None,
            last_modified: None,
            file_size: None,
            extra: Map::new(),
        }
    }

    /// The editable part of this record.
    #[must_use]
    pub fn to_draft(&self) -> NewFunction {
        NewFunction {
            name: self.name.clone(),
            description: self.description.clone(),
            lambda_function: self.lambda_function.clone(),
            enabled: self.enabled,
            parameters: self.parameters.clone(),
        }
    }

    /// Overwrite the editable fields, keeping `id`, metadata and `extra`.
    pub fn apply_draft(&mut self, draft: NewFunction) {
        self.name = draft.name;
        self.description = draft.description;
        self.lambda_function = draft.lambda_function;
        self.enabled = draft.enabled;
        self.parameters = draft.parameters;
    }
}
