//! Schema-agnostic YAML documents.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A parsed stream or template document.
///
/// Documents are schema-agnostic: whatever keys the YAML file carries are
/// preserved as-is. The only structural requirement is that the document
/// root is a mapping; anything else fails to deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Mapping);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The document's `name` field, when present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// The document's `description` field, when present and a string.
    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }

    /// The document's `status` field, when present and a string.
    pub fn status(&self) -> Option<&str> {
        self.get("status").and_then(Value::as_str)
    }

    /// Set the `name` field, replacing any value the document carried.
    ///
    /// Listings use this to stamp the filename-derived identity onto each
    /// document, so a stray `name:` key inside the file cannot masquerade
    /// as a different template.
    pub fn set_name(&mut self, name: &str) {
        self.0.insert(Value::from("name"), Value::from(name));
    }

    /// Borrow the underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Consume the document, yielding the underlying mapping.
    pub fn into_mapping(self) -> Mapping {
        self.0
    }
}

impl From<Mapping> for Document {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}
