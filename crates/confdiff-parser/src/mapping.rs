//! Parsed configuration mappings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::resolve::resolve_refs;

/// An insertion-ordered `Key=Value` mapping parsed from raw config text.
///
/// Parsing never fails: lines that do not carry a key and a value around an
/// `=` separator are dropped, duplicate keys overwrite the earlier value
/// while keeping the earlier position, and `$Base$NAME$` references are
/// resolved one hop against the values as parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMapping {
    entries: IndexMap<String, String>,
}

impl ConfigMapping {
    /// Parse raw config text into a resolved mapping.
    ///
    /// A line contributes an entry when it has an `=` with at least one
    /// character on each side; the split happens at the first such `=`.
    /// Key and value are trimmed afterwards, so `A = 1` yields key `A` and
    /// value `1` while `A=` and `=1` are dropped like any other malformed
    /// line, and `=a=b` splits into `=a` and `b`. After all lines are read,
    /// every value is passed through reference resolution against the
    /// parsed set.
    pub fn parse(text: &str) -> Self {
        let mut entries: IndexMap<String, String> = IndexMap::new();

        for line in text.lines() {
            // A leading `=` joins the key when a later separator qualifies.
            let Some(at) = line
                .match_indices('=')
                .map(|(at, _)| at)
                .find(|&at| at > 0 && at + 1 < line.len())
            else {
                continue;
            };
            let key = line[..at].trim().to_string();
            let value = line[at + 1..].trim().to_string();
            entries.insert(key, value);
        }

        let resolved = entries
            .iter()
            .map(|(key, value)| (key.clone(), resolve_refs(value, &entries)))
            .collect();

        Self { entries: resolved }
    }

    /// Keys in the order their lines first appeared.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolved value for `key`, or the empty string when absent.
    pub fn value(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether `key` is present in the mapping.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, resolved value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
