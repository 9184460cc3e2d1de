//! Titled lore entries with keyword search.

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Stores free-text lore keyed by title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoreManager {
    entries: Store<String>,
}

impl LoreManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, overwriting any entry with the same title.
    pub fn add_lore(&mut self, title: impl Into<String>, content: impl Into<String>) {
        let title = title.into();
        tracing::debug!(title = %title, "lore added");
        self.entries.insert(title, content.into());
    }

    /// The content stored under `title`, or an empty string.
    pub fn get_lore(&self, title: &str) -> &str {
        self.entries.get(title).map(String::as_str).unwrap_or("")
    }

    /// Every entry whose title or content contains `keyword`, ignoring case.
    ///
    /// Matches are returned as `(title, content)` pairs in store order.
    pub fn query_lore(&self, keyword: &str) -> Vec<(&str, &str)> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|(title, content)| {
                title.to_lowercase().contains(&needle) || content.to_lowercase().contains(&needle)
            })
            .map(|(title, content)| (title, content.as_str()))
            .collect()
    }

    /// Whether an entry exists under `title`, even one with empty content.
    pub fn contains(&self, title: &str) -> bool {
        self.entries.contains_key(title)
    }

    /// All titles in store order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(title, _)| title)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
