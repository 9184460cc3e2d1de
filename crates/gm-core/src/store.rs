//! Insertion-ordered keyed storage shared by the record managers.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string-keyed map that iterates in insertion order.
///
/// Replacing the value of an existing key keeps the key's original position.
/// Entries are never removed.
#[derive(Debug, Clone)]
pub(crate) struct Store<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> Store<V> {
    /// Insert or replace, returning the previous value.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let pos = *self.index.get(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Get the value for `key`, inserting `default()` first if absent.
    pub(crate) fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let pos = match self.index.get(key) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.to_string(), pos);
                self.entries.push((key.to_string(), default()));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for Store<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut store = Self::default();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

// Serialized as an ordered list of `[key, value]` pairs so order survives a round trip.
impl<V: Serialize> Serialize for Store<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Store<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<(String, V)>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
