//! Flattened ship records.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key under which the root `name` attribute is stored.
pub const NAME_KEY: &str = "name";

/// Insertion-ordered mapping from slash-joined element paths to leaf text.
///
/// Re-inserting an existing key replaces its value but keeps the original
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShipRecord {
    entries: Vec<(String, Option<String>)>,
    positions: HashMap<String, usize>,
}

impl ShipRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record holding only the synthetic `name` entry.
    pub fn seeded(name: Option<&str>) -> Self {
        let mut record = Self::new();
        record.insert(NAME_KEY, name.map(str::to_string));
        record
    }

    /// Insert or overwrite a value, returning the previous one if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up an entry; the outer `Option` is key presence, the inner one text presence.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.positions
            .get(key)
            .map(|&index| self.entries[index].1.as_deref())
    }

    /// The ship name, if present and non-null.
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY).flatten()
    }

    /// Whether the key is present (with or without text).
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Merge another record into this one, in its order, last write wins.
    pub fn merge(&mut self, other: ShipRecord) {
        self.extend(other.entries);
    }
}

impl Extend<(String, Option<String>)> for ShipRecord {
    fn extend<I: IntoIterator<Item = (String, Option<String>)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl FromIterator<(String, Option<String>)> for ShipRecord {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut record = Self::new();
        record.extend(iter);
        record
    }
}

impl Serialize for ShipRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
