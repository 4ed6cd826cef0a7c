//! Insertion-ordered indicator map.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Mapping from indicator code to description.
///
/// Entries keep the position of their first insertion. Inserting an existing
/// code replaces its description in place (last write wins), so iteration
/// order is the encounter order of distinct codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorMap {
    entries: Vec<(String, String)>,
    index: BTreeMap<String, usize>,
}

impl IndicatorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a description.
    ///
    /// Returns the previous description when `code` was already present.
    pub fn insert(
        &mut self,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<String> {
        let code = code.into();
        let description = description.into();
        if let Some(&position) = self.index.get(&code) {
            let previous = std::mem::replace(&mut self.entries[position].1, description);
            return Some(previous);
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push((code, description));
        None
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(code, description)` pairs in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, description)| (code.as_str(), description.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for IndicatorMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code, description) in iter {
            map.insert(code, description);
        }
        map
    }
}

impl Serialize for IndicatorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (code, description) in self.iter() {
            map.serialize_entry(code, description)?;
        }
        map.end()
    }
}
