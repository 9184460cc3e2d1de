//! Per-character attribute records.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Store;

/// An open mapping of attribute name to value describing one character.
///
/// No schema is enforced: any attribute may hold any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterRecord(Map<String, Value>);

impl CharacterRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(attribute, value);
        self
    }

    /// Set one attribute, replacing any previous value.
    pub fn set(&mut self, attribute: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(attribute.into(), value.into());
    }

    /// Look up one attribute.
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    /// The `name` attribute, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// Copy every attribute of `other` into this record.
    pub fn merge(&mut self, other: CharacterRecord) {
        self.0.extend(other.0);
    }

    /// Iterate attributes.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a record from a JSON object. Returns `None` for any other JSON value.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The record as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for CharacterRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Stores attribute records for players and NPCs, keyed by character ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterManager {
    characters: Store<CharacterRecord>,
}

impl CharacterManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the full record for `id`.
    pub fn add_character(&mut self, id: impl Into<String>, data: CharacterRecord) {
        let id = id.into();
        tracing::debug!(character = %id, "character added");
        self.characters.insert(id, data);
    }

    /// Merge `data` into the record for `id` if one exists.
    ///
    /// Unlike [`add_character`](Self::add_character) this never creates a
    /// record: updating an unknown ID does nothing and returns `false`.
    pub fn update_character(&mut self, id: &str, data: CharacterRecord) -> bool {
        match self.characters.get_mut(id) {
            Some(record) => {
                record.merge(data);
                tracing::debug!(character = id, "character updated");
                true
            }
            None => {
                tracing::debug!(character = id, "update ignored for unknown character");
                false
            }
        }
    }

    /// The record for `id`, or an empty record if there is none.
    pub fn get_character(&self, id: &str) -> Cow<'_, CharacterRecord> {
        match self.characters.get(id) {
            Some(record) => Cow::Borrowed(record),
            None => Cow::Owned(CharacterRecord::default()),
        }
    }

    /// The record for `id`, if one exists.
    pub fn find(&self, id: &str) -> Option<&CharacterRecord> {
        self.characters.get(id)
    }

    /// All records, in the order they were first added.
    pub fn describe_party(&self) -> Vec<&CharacterRecord> {
        self.characters.values().collect()
    }

    /// All `(id, record)` pairs, in the order they were first added.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CharacterRecord)> {
        self.characters.iter()
    }

    /// Character IDs, in the order they were first added.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(|(id, _)| id)
    }

    /// Whether a record exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.characters.contains_key(id)
    }

    /// Number of stored characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether no characters are stored.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_and_get() {
        let mut cm = CharacterManager::new();
        cm.add_character("c1", CharacterRecord::new().with("name", "A"));
        assert_eq!(cm.get_character("c1").name(), Some("A"));
        assert_eq!(cm.get_character("c1").get("name"), Some(&json!("A")));
    }

    #[test]
    fn add_replaces_whole_record() {
        let mut cm = CharacterManager::new();
        cm.add_character("c1", CharacterRecord::new().with("name", "A").with("hp", 10));
        cm.add_character("c1", CharacterRecord::new().with("name", "B"));
        let record = cm.get_character("c1");
        assert_eq!(record.name(), Some("B"));
        assert!(record.get("hp").is_none());
        assert_eq!(cm.len(), 1);
    }

    #[test]
    fn update_merges_fields() {
        let mut cm = CharacterManager::new();
        cm.add_character("c1", CharacterRecord::new().with("name", "A").with("hp", 10));
        assert!(cm.update_character("c1", CharacterRecord::new().with("hp", 7)));
        let record = cm.get_character("c1");
        assert_eq!(record.name(), Some("A"));
        assert_eq!(record.get("hp"), Some(&json!(7)));
    }

    #[test]
    fn update_unknown_is_noop() {
        let mut cm = CharacterManager::new();
        assert!(!cm.update_character("ghost", CharacterRecord::new().with("name", "Boo")));
        assert!(cm.get_character("ghost").is_empty());
        assert!(!cm.contains("ghost"));
        assert!(cm.is_empty());
    }

    #[test]
    fn missing_character_is_empty() {
        let cm = CharacterManager::new();
        assert!(cm.get_character("nobody").is_empty());
        assert!(cm.find("nobody").is_none());
    }

    #[test]
    fn describe_party_in_insertion_order() {
        let mut cm = CharacterManager::new();
        cm.add_character("zed", CharacterRecord::new().with("name", "Zed"));
        cm.add_character("amy", CharacterRecord::new().with("name", "Amy"));
        cm.add_character("zed", CharacterRecord::new().with("name", "Zed II"));
        let names: Vec<_> = cm.describe_party().into_iter().filter_map(|r| r.name()).collect();
        assert_eq!(names, vec!["Zed II", "Amy"]);
        let ids: Vec<_> = cm.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zed", "amy"]);
    }

    #[test]
    fn ids_follow_first_insertion() {
        let mut cm = CharacterManager::new();
        cm.add_character("kael", CharacterRecord::new());
        cm.add_character("bryn", CharacterRecord::new());
        cm.add_character("ash", CharacterRecord::new());
        cm.add_character("kael", CharacterRecord::new().with("name", "Kael"));
        assert_eq!(cm.ids().collect::<Vec<_>>(), vec!["kael", "bryn", "ash"]);
        assert_eq!(CharacterManager::new().ids().count(), 0);
    }

    #[test]
    fn record_from_json() {
        let record = CharacterRecord::from_json(json!({"name": "Kael", "class": "knight"})).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.to_json(), json!({"name": "Kael", "class": "knight"}));
        assert!(CharacterRecord::from_json(json!("not an object")).is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let mut cm = CharacterManager::new();
        cm.add_character("c1", CharacterRecord::new().with("name", "A"));
        let json = serde_json::to_string(&cm).unwrap();
        let back: CharacterManager = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get_character("c1").name(), Some("A"));
    }
}
