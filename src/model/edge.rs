//! Edge records and classification outputs

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Identifier of a network edge, carried through for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw OSM tag value as it appears on an edge record.
///
/// Edges produced by merging adjacent ways can carry several values for
/// one key (`lanes`, `maxspeed`), hence the `List` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Number(f64),
    Text(String),
    List(Vec<TagValue>),
}

impl TagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TagValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// NaN is the missing-value marker of the source data model; a tag
    /// carrying it is as good as absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, TagValue::Number(n) if n.is_nan())
    }

    /// Iterate scalar values, flattening a `List` one level.
    pub fn scalars(&self) -> impl Iterator<Item = &TagValue> {
        match self {
            TagValue::List(items) => itertools::Either::Left(items.iter()),
            other => itertools::Either::Right(std::iter::once(other)),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_owned())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<f64> for TagValue {
    fn from(n: f64) -> Self {
        TagValue::Number(n)
    }
}

impl From<Vec<TagValue>> for TagValue {
    fn from(items: Vec<TagValue>) -> Self {
        TagValue::List(items)
    }
}

/// One road segment with its raw tag attributes.
///
/// Records are read-only facts: classification stages only attach derived
/// values (rule ids, LTS), never mutate or remove tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    #[serde(flatten)]
    tags: HashMap<String, TagValue>,
}

impl EdgeRecord {
    pub fn new(id: u64) -> Self {
        Self {
            id: EdgeId(id),
            tags: HashMap::new(),
        }
    }

    /// Builder-style tag attachment, mostly for constructing fixtures.
    #[must_use]
    pub fn with_tag(mut self, key: &str, value: impl Into<TagValue>) -> Self {
        self.tags.insert(key.to_owned(), value.into());
        self
    }

    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    pub fn tag_str(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(TagValue::as_str)
    }

    /// True when the tag is present with exactly the given textual value.
    /// Missing tags and non-text values compare unequal, as in the source
    /// data model where NaN never equals a string.
    pub fn tag_is(&self, key: &str, value: &str) -> bool {
        self.tag_str(key) == Some(value)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }
}

/// Diagnostic id of the cascade rule that matched an edge (`p2`, `s3`, `m9`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RuleId(pub &'static str);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Level of Traffic Stress: ordinal 1 (all ages and abilities) to 4
/// (confident cyclists only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Lts {
    Lts1 = 1,
    Lts2 = 2,
    Lts3 = 3,
    Lts4 = 4,
}

impl Lts {
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl From<Lts> for u8 {
    fn from(lts: Lts) -> u8 {
        lts as u8
    }
}

impl TryFrom<u8> for Lts {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Lts::Lts1),
            2 => Ok(Lts::Lts2),
            3 => Ok(Lts::Lts3),
            4 => Ok(Lts::Lts4),
            other => Err(format!("LTS level out of range: {other}")),
        }
    }
}

impl fmt::Display for Lts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Splitter output: an edge plus the diagnostic rule that routed it
#[derive(Debug, Clone, Serialize)]
pub struct TaggedEdge {
    pub edge: EdgeRecord,
    pub rule: RuleId,
}

/// Scorer output: an edge with its matched rule and final stress level
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEdge {
    pub edge: EdgeRecord,
    pub rule: RuleId,
    pub lts: Lts,
}
