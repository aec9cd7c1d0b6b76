//! Permission filter: is cycling permitted on this edge at all?
//!
//! Sidewalk-like footways without an explicit `bicycle=yes`, motorways,
//! proposed ways, and explicit access bans are filtered out. Rule
//! semantics follow Bike Ottawa's stress model.

use itertools::{Either, Itertools};

use crate::model::{EdgeRecord, RuleId, TagSchema, TaggedEdge};
use crate::rules::{Rule, RuleSet};

/// Rule assigned to permitted edges.
pub const PERMITTED: RuleId = RuleId("p0");

/// The p-cascade in priority order; no match means cycling is permitted.
pub fn rules() -> RuleSet<TagSchema, ()> {
    RuleSet::new(
        "permission",
        vec![
            Rule {
                id: RuleId("p2"),
                value: (),
                matches: |edge, _| edge.tag_is("bicycle", "no"),
            },
            Rule {
                id: RuleId("p6"),
                value: (),
                matches: |edge, _| edge.tag_is("access", "no"),
            },
            Rule {
                id: RuleId("p3"),
                value: (),
                matches: |edge, _| edge.tag_is("highway", "motorway"),
            },
            Rule {
                id: RuleId("p4"),
                value: (),
                matches: |edge, _| edge.tag_is("highway", "motorway_link"),
            },
            Rule {
                id: RuleId("p7"),
                value: (),
                matches: |edge, _| edge.tag_is("highway", "proposed"),
            },
            Rule {
                id: RuleId("p5"),
                value: (),
                matches: |edge, _| {
                    edge.tag_is("footway", "sidewalk")
                        && !edge.tag_is("bicycle", "yes")
                        && (edge.tag_is("highway", "footway") || edge.tag_is("highway", "path"))
                },
            },
        ],
    )
}

/// Split edges into (allowed, not allowed), both tagged with their rule.
pub fn split_permitted(
    edges: Vec<EdgeRecord>,
    schema: &TagSchema,
) -> (Vec<TaggedEdge>, Vec<TaggedEdge>) {
    let table = rules();
    edges.into_iter().partition_map(|edge| {
        match table.first_match(&edge, schema) {
            None => Either::Left(TaggedEdge {
                edge,
                rule: PERMITTED,
            }),
            Some((rule, ())) => Either::Right(TaggedEdge { edge, rule }),
        }
    })
}
