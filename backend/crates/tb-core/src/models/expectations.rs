use std::collections::BTreeMap;

use serde::Serialize;

/// Field display name -> value the caller expects to read back.
///
/// Only fields the caller explicitly set ever appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expectations(BTreeMap<String, String>);

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts for the same field replace earlier ones
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, field: K, expected: V) {
        self.0.insert(field.into(), expected.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
