//! Path suffixes
//!
//! A route with suffixes fans out into one concrete route per suffix, each
//! at `own path + suffix path`. Suffixes keep insertion order so that
//! flattening and describing stay deterministic.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

use crate::direction::is_reserved_name;

/// One named path fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub name: String,
    pub path: String,
    /// Default variant: its resolved path becomes the parent's index direction
    pub index: bool,
}

impl Suffix {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            index: false,
        }
    }

    pub fn index(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            index: true,
            ..Self::new(name, path)
        }
    }
}

/// Ordered collection of suffixes, unique by name
///
/// # Examples
///
/// ```
/// use rhtmx_chart::Suffixes;
///
/// let suffixes = Suffixes::new()
///     .with("in", "/in")
///     .with("up", "/up")
///     .with("in", "/login"); // replaces in place
///
/// let names: Vec<&str> = suffixes.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, vec!["in", "up"]);
/// assert_eq!(suffixes.get("in").unwrap().path, "/login");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suffixes {
    entries: Vec<Suffix>,
}

impl Suffixes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suffix> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Suffix> {
        self.entries.iter().find(|s| s.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// First suffix flagged as index
    pub fn index(&self) -> Option<&Suffix> {
        self.entries.iter().find(|s| s.index)
    }

    /// Inserts a suffix, replacing an existing one of the same name in place
    ///
    /// Reserved direction names (`$`, `$$`) are rejected with a warning;
    /// returns whether the suffix was stored.
    pub fn insert(&mut self, suffix: Suffix) -> bool {
        if is_reserved_name(&suffix.name) {
            warn!(name = %suffix.name, "suffix name is reserved for directions, ignoring it");
            return false;
        }

        match self.entries.iter_mut().find(|s| s.name == suffix.name) {
            Some(existing) => *existing = suffix,
            None => self.entries.push(suffix),
        }
        true
    }

    /// Builder form of [`Suffixes::insert`]
    pub fn with(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(Suffix::new(name, path));
        self
    }

    /// Adds a suffix flagged as the index variant
    pub fn with_index(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(Suffix::index(name, path));
        self
    }

    /// Merges `other` into these suffixes (other wins on name clashes)
    pub fn merge(mut self, other: Suffixes) -> Self {
        for suffix in other.entries {
            self.insert(suffix);
        }
        self
    }

    /// Drops every suffix whose name is listed
    pub fn without(mut self, names: &[&str]) -> Self {
        self.entries.retain(|s| !names.contains(&s.name.as_str()));
        self
    }
}

impl<'a> IntoIterator for &'a Suffixes {
    type Item = &'a Suffix;
    type IntoIter = std::slice::Iter<'a, Suffix>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<N, P> FromIterator<(N, P)> for Suffixes
where
    N: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Suffixes::new(), |suffixes, (name, path)| suffixes.with(name, path))
    }
}

// ============================================================================
// Serde
// ============================================================================
//
// Shapes write suffixes as a map of name → path, or name → { path, index }.
// A hand-written visitor keeps the document order of the map.

#[derive(Deserialize)]
#[serde(untagged)]
enum SuffixValue {
    Path(String),
    Entry {
        path: String,
        #[serde(default)]
        index: bool,
    },
}

#[derive(Serialize)]
struct SuffixEntry<'a> {
    path: &'a str,
    index: bool,
}

impl Serialize for Suffixes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for suffix in &self.entries {
            if suffix.index {
                map.serialize_entry(
                    &suffix.name,
                    &SuffixEntry {
                        path: &suffix.path,
                        index: true,
                    },
                )?;
            } else {
                map.serialize_entry(&suffix.name, &suffix.path)?;
            }
        }
        map.end()
    }
}

struct SuffixesVisitor;

impl<'de> Visitor<'de> for SuffixesVisitor {
    type Value = Suffixes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of suffix name to path")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Suffixes, A::Error> {
        let mut suffixes = Suffixes::new();
        while let Some((name, value)) = access.next_entry::<String, SuffixValue>()? {
            let suffix = match value {
                SuffixValue::Path(path) => Suffix::new(name, path),
                SuffixValue::Entry { path, index } => Suffix { name, path, index },
            };
            suffixes.insert(suffix);
        }
        Ok(suffixes)
    }
}

impl<'de> Deserialize<'de> for Suffixes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SuffixesVisitor)
    }
}
