//! Lane presence: marked bike lane vs mixed traffic.
//!
//! A single boolean check across the configured cycleway keys plus the
//! bikeable-shoulder tag; no priority order and no diagnostic rule.

use crate::model::{EdgeRecord, TagSchema};

/// Cycleway values that indicate a marked lane alongside the roadway.
pub const LANE_VALUES: [&str; 7] = [
    "crossing",
    "lane",
    "left",
    "opposite",
    "opposite_lane",
    "right",
    "yes",
];

pub fn has_bike_lane(edge: &EdgeRecord, schema: &TagSchema) -> bool {
    schema.any_cycleway_in(edge, &LANE_VALUES)
        || edge.tag_is(&schema.shoulder_access_key, "yes")
}

/// Split roadway edges into (has lane, mixed traffic).
pub fn split_bike_lane(
    edges: Vec<EdgeRecord>,
    schema: &TagSchema,
) -> (Vec<EdgeRecord>, Vec<EdgeRecord>) {
    edges
        .into_iter()
        .partition(|edge| has_bike_lane(edge, schema))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TagSchema {
        TagSchema::default()
    }

    #[test]
    fn lane_values_are_detected_on_any_configured_key() {
        for value in LANE_VALUES {
            let edge = EdgeRecord::new(1)
                .with_tag("highway", "secondary")
                .with_tag("cycleway:right", value);
            assert!(has_bike_lane(&edge, &schema()), "value={value}");
        }
    }

    #[test]
    fn bikeable_shoulder_counts_as_a_lane() {
        let edge = EdgeRecord::new(1)
            .with_tag("highway", "secondary")
            .with_tag("shoulder:access:bicycle", "yes");
        assert!(has_bike_lane(&edge, &schema()));

        let edge = EdgeRecord::new(2)
            .with_tag("highway", "secondary")
            .with_tag("shoulder:access:bicycle", "no");
        assert!(!has_bike_lane(&edge, &schema()));
    }

    #[test]
    fn split_partitions_the_batch() {
        let edges = vec![
            EdgeRecord::new(1).with_tag("cycleway", "lane"),
            EdgeRecord::new(2).with_tag("highway", "residential"),
        ];
        let (has_lane, no_lane) = split_bike_lane(edges, &schema());
        assert_eq!(has_lane.len(), 1);
        assert_eq!(has_lane[0].id.0, 1);
        assert_eq!(no_lane.len(), 1);
        assert_eq!(no_lane[0].id.0, 2);
    }
}
