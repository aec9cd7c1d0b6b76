//! Recognized tag keys and their validation.
//!
//! The upstream data model discovers cycleway- and parking-family columns
//! by substring scans over the dataframe schema. Here the recognized keys
//! are explicit configuration: the lists below are validated once, and the
//! classifiers only ever consult keys named in them.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::EdgeRecord;

/// Tag keys the classifiers read.
///
/// `cycleway_keys` and `parking_keys` are the recognized members of the two
/// tag families; the remaining fields name single tags whose key can vary
/// between extracts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSchema {
    pub cycleway_keys: Vec<String>,
    pub parking_keys: Vec<String>,
    pub shoulder_access_key: String,
    pub width_key: String,
    pub lanes_key: String,
    pub maxspeed_key: String,
}

impl Default for TagSchema {
    fn default() -> Self {
        Self {
            cycleway_keys: vec![
                "cycleway".to_owned(),
                "cycleway:left".to_owned(),
                "cycleway:right".to_owned(),
                "cycleway:both".to_owned(),
            ],
            parking_keys: vec![
                "parking:lane:left".to_owned(),
                "parking:lane:right".to_owned(),
                "parking:lane:both".to_owned(),
                "parking:left".to_owned(),
                "parking:right".to_owned(),
                "parking:both".to_owned(),
            ],
            shoulder_access_key: "shoulder:access:bicycle".to_owned(),
            width_key: "width".to_owned(),
            lanes_key: "lanes".to_owned(),
            maxspeed_key: "maxspeed".to_owned(),
        }
    }
}

impl TagSchema {
    /// Reject configurations that cannot classify anything.
    ///
    /// An empty family list would silently disable the separation and lane
    /// stages, so it is an error rather than a fallback.
    pub fn validate(&self) -> Result<(), Error> {
        if self.cycleway_keys.is_empty() {
            return Err(Error::InvalidConfig(
                "cycleway key list is empty".to_owned(),
            ));
        }
        if self.parking_keys.is_empty() {
            return Err(Error::InvalidConfig("parking key list is empty".to_owned()));
        }
        Ok(())
    }

    /// True when any recognized cycleway tag on the edge equals `value`.
    pub fn any_cycleway_is(&self, edge: &EdgeRecord, value: &str) -> bool {
        self.cycleway_keys.iter().any(|key| edge.tag_is(key, value))
    }

    /// True when any recognized cycleway tag takes one of `values`.
    pub fn any_cycleway_in(&self, edge: &EdgeRecord, values: &[&str]) -> bool {
        self.cycleway_keys
            .iter()
            .filter_map(|key| edge.tag_str(key))
            .any(|tag| values.contains(&tag))
    }

    /// True when any recognized parking tag takes one of `values`.
    pub fn any_parking_in(&self, edge: &EdgeRecord, values: &[&str]) -> bool {
        self.parking_keys
            .iter()
            .filter_map(|key| edge.tag_str(key))
            .any(|tag| values.contains(&tag))
    }

    /// Whether `key` occurs on at least one edge of the batch. The
    /// record-oriented equivalent of a column existing in a tabular schema.
    pub fn key_in_batch(edges: &[EdgeRecord], key: &str) -> bool {
        edges.iter().any(|edge| edge.has_tag(key))
    }

    /// Fail with [`Error::MissingColumn`] when a key a stage depends on is
    /// absent from the whole (non-empty) batch.
    pub fn require_key_in_batch(edges: &[EdgeRecord], key: &str) -> Result<(), Error> {
        if edges.is_empty() || Self::key_in_batch(edges, key) {
            Ok(())
        } else {
            Err(Error::MissingColumn(key.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_validates() {
        assert!(TagSchema::default().validate().is_ok());
    }

    #[test]
    fn empty_family_list_is_rejected() {
        let schema = TagSchema {
            cycleway_keys: vec![],
            ..TagSchema::default()
        };
        assert!(matches!(schema.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn family_lookup_checks_every_configured_key() {
        let schema = TagSchema::default();
        let edge = EdgeRecord::new(1).with_tag("cycleway:right", "track");
        assert!(schema.any_cycleway_is(&edge, "track"));
        assert!(!schema.any_cycleway_is(&edge, "lane"));
        assert!(schema.any_cycleway_in(&edge, &["track", "lane"]));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let schema = TagSchema::default();
        let edge = EdgeRecord::new(1).with_tag("cycleway:surface", "track");
        assert!(!schema.any_cycleway_is(&edge, "track"));
    }

    #[test]
    fn batch_key_requirement() {
        let edges = vec![
            EdgeRecord::new(1).with_tag("highway", "residential"),
            EdgeRecord::new(2).with_tag("width", 3.0),
        ];
        assert!(TagSchema::require_key_in_batch(&edges, "width").is_ok());
        assert!(matches!(
            TagSchema::require_key_in_batch(&edges, "maxspeed"),
            Err(Error::MissingColumn(_))
        ));
        assert!(TagSchema::require_key_in_batch(&[], "width").is_ok());
    }
}
