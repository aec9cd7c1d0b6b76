//! Separation classifier: physically separated path vs roadway.
//!
//! Cycleways, paths, non-crossing footways, and roads with a cycle track
//! count as separated. Under-construction ways deliberately do not: the
//! upstream model carries disabled rules for `highway=construction` and we
//! keep them off, so such ways fall through to the roadway stages.

use itertools::{Either, Itertools};

use crate::model::{EdgeRecord, RuleId, TagSchema, TaggedEdge};
use crate::rules::{Rule, RuleSet};

/// The s-cascade in priority order; no match means not separated (s0).
pub fn rules() -> RuleSet<TagSchema, ()> {
    RuleSet::new(
        "separation",
        vec![
            Rule {
                id: RuleId("s3"),
                value: (),
                matches: |edge, _| edge.tag_is("highway", "cycleway"),
            },
            Rule {
                id: RuleId("s1"),
                value: (),
                matches: |edge, _| edge.tag_is("highway", "path"),
            },
            Rule {
                id: RuleId("s2"),
                value: (),
                matches: |edge, _| {
                    edge.tag_is("highway", "footway") && !edge.tag_is("footway", "crossing")
                },
            },
            Rule {
                id: RuleId("s7"),
                value: (),
                matches: |edge, schema| schema.any_cycleway_is(edge, "track"),
            },
            Rule {
                id: RuleId("s8"),
                value: (),
                matches: |edge, schema| schema.any_cycleway_is(edge, "opposite_track"),
            },
        ],
    )
}

/// Split permitted edges into (separated, not separated). The diagnostic
/// rule is dropped from the unseparated side: those edges get a fresh
/// classification downstream.
pub fn split_separated(
    edges: Vec<EdgeRecord>,
    schema: &TagSchema,
) -> (Vec<TaggedEdge>, Vec<EdgeRecord>) {
    let table = rules();
    edges.into_iter().partition_map(|edge| {
        match table.first_match(&edge, schema) {
            Some((rule, ())) => Either::Left(TaggedEdge { edge, rule }),
            None => Either::Right(edge),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TagSchema {
        TagSchema::default()
    }

    #[test]
    fn cycleway_highway_is_s3() {
        let edge = EdgeRecord::new(1).with_tag("highway", "cycleway");
        let (separated, _) = split_separated(vec![edge], &schema());
        assert_eq!(separated[0].rule, RuleId("s3"));
    }

    #[test]
    fn footway_at_crossing_is_not_separated() {
        let edge = EdgeRecord::new(1)
            .with_tag("highway", "footway")
            .with_tag("footway", "crossing");
        let (separated, not_separated) = split_separated(vec![edge], &schema());
        assert!(separated.is_empty());
        assert_eq!(not_separated.len(), 1);

        let edge = EdgeRecord::new(2).with_tag("highway", "footway");
        let (separated, _) = split_separated(vec![edge], &schema());
        assert_eq!(separated[0].rule, RuleId("s2"));
    }

    #[test]
    fn cycle_track_on_any_configured_key() {
        let edge = EdgeRecord::new(1)
            .with_tag("highway", "secondary")
            .with_tag("cycleway:left", "track");
        let (separated, _) = split_separated(vec![edge], &schema());
        assert_eq!(separated[0].rule, RuleId("s7"));

        let edge = EdgeRecord::new(2)
            .with_tag("highway", "secondary")
            .with_tag("cycleway", "opposite_track");
        let (separated, _) = split_separated(vec![edge], &schema());
        assert_eq!(separated[0].rule, RuleId("s8"));
    }

    #[test]
    fn highway_rule_outranks_track_tag() {
        // s3 before s7 in the cascade
        let edge = EdgeRecord::new(1)
            .with_tag("highway", "cycleway")
            .with_tag("cycleway", "track");
        let (separated, _) = split_separated(vec![edge], &schema());
        assert_eq!(separated[0].rule, RuleId("s3"));
    }

    #[test]
    fn construction_ways_are_not_separated() {
        let edge = EdgeRecord::new(1)
            .with_tag("highway", "construction")
            .with_tag("construction", "cycleway");
        let (separated, not_separated) = split_separated(vec![edge], &schema());
        assert!(separated.is_empty());
        assert_eq!(not_separated.len(), 1);
    }
}
