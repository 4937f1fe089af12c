use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::StencilError;

/// Mapping from placeholder key to replacement text, in insertion order.
///
/// Built from a JSON object by keeping only the members whose value is a
/// string. Members of any other type (numbers, booleans, arrays, objects,
/// null) are dropped without comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable(Vec<(String, String)>);

impl FieldTable {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a field table from JSON text.
    ///
    /// The document must be a single object. Member order is preserved and
    /// a repeated key keeps its first position with its last value.
    pub fn from_json_str(json: &str) -> Result<Self, StencilError> {
        let members: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| StencilError::MalformedDataError(e.to_string()))?;

        Ok(members
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|value| (key.clone(), value.to_string())))
            .collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of the table with every value wrapped by `mark`, for display
    /// runs that never touch the real substitution.
    pub fn marked(&self, mark: impl Fn(&str) -> String) -> Self {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), mark(value)))
            .collect()
    }

    /// Render the table as pretty printed JSON, keys in table order.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("field tables should serialize to json")
    }
}

impl FromIterator<(String, String)> for FieldTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for FieldTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}
