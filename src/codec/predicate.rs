//! Persisted predicate model.
//!
//! One column's condition persists as a single-key object, keyed by the
//! query operator: `{"$eq": "Active"}` or `{"$iLike": "%@acme.com"}`.
//! A filter set is an ordered `$and` list of per-column entries:
//!
//! ```json
//! { "$and": [ { "Email": { "$iLike": "%@acme.com" } } ] }
//! ```
//!
//! Deserialization is where format errors surface: an operator key other
//! than `$eq` / `$iLike`, or a non-string pattern, fails the whole decode
//! with a message naming the offending key.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One column's persisted condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Predicate {
    /// Exact, case-sensitive match.
    #[serde(rename = "$eq")]
    Eq(String),
    /// Case-insensitive pattern match; `%` wildcard, `\%` literal percent.
    #[serde(rename = "$iLike")]
    ILike(String),
}

struct PredicateVisitor;

impl<'de> Visitor<'de> for PredicateVisitor {
    type Value = Predicate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a predicate object keyed by \"$eq\" or \"$iLike\"")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Predicate, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(key) = map.next_key::<String>()? else {
            return Err(de::Error::custom("predicate object is empty"));
        };
        let predicate = match key.as_str() {
            "$eq" => Predicate::Eq(map.next_value()?),
            "$iLike" => Predicate::ILike(map.next_value()?),
            other => {
                return Err(de::Error::custom(format_args!(
                    "expected key to be \"$eq\" or \"$iLike\", got \"{other}\""
                )));
            }
        };
        // Single-key object; extra keys are dropped.
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(predicate)
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PredicateVisitor)
    }
}

/// One entry of the persisted `$and` list: a column name paired with its
/// predicate, stored as `{"<column>": {"$iLike": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub column: String,
    pub predicate: Predicate,
}

impl Serialize for FilterEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.column, &self.predicate)?;
        map.end()
    }
}

struct FilterEntryVisitor;

impl<'de> Visitor<'de> for FilterEntryVisitor {
    type Value = FilterEntry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a filter entry object keyed by a column name")
    }

    fn visit_map<A>(self, mut map: A) -> Result<FilterEntry, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some((column, predicate)) = map.next_entry::<String, Predicate>()? else {
            return Err(de::Error::custom("filter entry must contain a column"));
        };
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(FilterEntry { column, predicate })
    }
}

impl<'de> Deserialize<'de> for FilterEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FilterEntryVisitor)
    }
}

/// Ordered, AND-combined filter entries, persisted under `$and`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(rename = "$and", default)]
    pub and: Vec<FilterEntry>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.and.is_empty()
    }
}
