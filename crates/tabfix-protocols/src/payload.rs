//! Undo state recorded by an apply.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const INDEX_PREFIX: &str = "el-";

/// Pre-mutation class strings keyed by match position.
///
/// Serialized as an object with `"el-<index>"` keys. Iteration is in
/// numeric index order, so `el-10` comes after `el-9`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginalClasses(BTreeMap<usize, String>);

impl OriginalClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, index: usize, class_name: impl Into<String>) {
        self.0.insert(index, class_name.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(index, class)| (*index, class.as_str()))
    }

    /// Storage key of a match position.
    pub fn key_for(index: usize) -> String {
        format!("{INDEX_PREFIX}{index}")
    }

    fn parse_key(key: &str) -> Option<usize> {
        key.strip_prefix(INDEX_PREFIX).unwrap_or(key).parse().ok()
    }
}

impl FromIterator<(usize, String)> for OriginalClasses {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for OriginalClasses {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, class) in &self.0 {
            map.serialize_entry(&Self::key_for(*index), class)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OriginalClasses {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ClassesVisitor;

        impl<'de> Visitor<'de> for ClassesVisitor {
            type Value = OriginalClasses;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of \"el-<index>\" keys to class strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut classes = OriginalClasses::new();
                while let Some((key, class)) = access.next_entry::<String, String>()? {
                    let index = OriginalClasses::parse_key(&key).ok_or_else(|| {
                        de::Error::custom(format!("invalid element index key: {key}"))
                    })?;
                    classes.insert(index, class);
                }
                Ok(classes)
            }
        }

        deserializer.deserialize_map(ClassesVisitor)
    }
}

/// Persisted record sufficient to reverse one apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoPayload {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,

    pub original_state: OriginalClasses,
}

impl UndoPayload {
    /// Stamp the recorded state with the current time.
    pub fn new(original_state: OriginalClasses) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            original_state,
        }
    }
}
