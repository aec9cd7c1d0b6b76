//! Parking presence alongside a bike lane.
//!
//! Selects between the two lane scorers. A batch where no configured
//! parking key occurs at all is treated as parking-free everywhere; that
//! is a legitimate state for extracts without parking mapping, logged at
//! warn level so a misconfigured key list is still noticeable.

use log::warn;

use crate::model::{EdgeRecord, TagSchema};

/// Parking values that indicate cars stored next to the lane.
pub const PARKING_VALUES: [&str; 5] = ["yes", "parallel", "perpendicular", "diagonal", "marked"];

pub fn has_parking(edge: &EdgeRecord, schema: &TagSchema) -> bool {
    schema.any_parking_in(edge, &PARKING_VALUES)
}

/// Split lane-having edges into (parking present, parking absent).
pub fn split_parking(
    edges: Vec<EdgeRecord>,
    schema: &TagSchema,
) -> (Vec<EdgeRecord>, Vec<EdgeRecord>) {
    let family_present = schema
        .parking_keys
        .iter()
        .any(|key| TagSchema::key_in_batch(&edges, key));
    if !edges.is_empty() && !family_present {
        warn!("No parking-family tags in batch; treating all edges as parking-free");
    }

    edges.into_iter().partition(|edge| has_parking(edge, schema))
}
