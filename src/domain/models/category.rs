//! Analysis categories and per-category score sets.
//!
//! An analysis rates a website along a fixed set of categories, each scored
//! 0-100. Scores arrive as a JSON object produced by the analysis pipeline;
//! keys may use any casing and values are not guaranteed to be numeric.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One scored aspect of an analyzed website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Findability,
    TrustProof,
    ConversionReadiness,
    MobileUsability,
    OfferClarity,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Findability,
        Self::TrustProof,
        Self::ConversionReadiness,
        Self::MobileUsability,
        Self::OfferClarity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Findability => "findability",
            Self::TrustProof => "trustProof",
            Self::ConversionReadiness => "conversionReadiness",
            Self::MobileUsability => "mobileUsability",
            Self::OfferClarity => "offerClarity",
        }
    }

    /// Resolve a category from a score key, ignoring case.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "findability" => Some(Self::Findability),
            "trustproof" => Some(Self::TrustProof),
            "conversionreadiness" => Some(Self::ConversionReadiness),
            "mobileusability" => Some(Self::MobileUsability),
            "offerclarity" => Some(Self::OfferClarity),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category name to score mapping, in the order the analysis reported it.
///
/// Iteration order matters: the task generator breaks score ties by it.
/// Values that were missing or not numeric are kept as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryScoreSet {
    entries: Vec<(String, Option<f64>)>,
}

impl CategoryScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by callers that already hold numeric scores.
    pub fn with_score(mut self, key: impl Into<String>, score: f64) -> Self {
        self.insert(key, Some(score));
        self
    }

    /// Insert or replace a score, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, score: Option<f64>) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = score;
        } else {
            self.entries.push((key, score));
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse a JSON document, keeping the key order of the source text.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl Serialize for CategoryScoreSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ScoreSetVisitor;

impl<'de> Visitor<'de> for ScoreSetVisitor {
    type Value = CategoryScoreSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to scores")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = CategoryScoreSet::new();
        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            set.insert(key, value.as_f64());
        }
        Ok(set)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(CategoryScoreSet::new())
    }
}

impl<'de> Deserialize<'de> for CategoryScoreSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScoreSetVisitor)
    }
}
