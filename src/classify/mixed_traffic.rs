//! Scorer for mixed-traffic edges (no bike lane).
//!
//! The longest cascade: special-cased low-stress facilities first
//! (car-free ways, pedestrian streets, alleys, tracks, slow service
//! roads), then speed/lane-count bands. The cascade is exhaustive — the
//! final rule catches every speed above 50 — so an unmatched edge is an
//! internal invariant violation, not a scoring outcome.

use rayon::prelude::*;

use crate::classify::{ClassifyConfig, WidthHandling, resolve_attributes};
use crate::error::Error;
use crate::model::{EdgeRecord, Lts, RuleId, ScoredEdge};
use crate::rules::{Resolved, Rule, RuleSet};

/// The m-cascade in priority order, no catch-all.
pub fn rules() -> RuleSet<Resolved, Lts> {
    RuleSet::new(
        "mixed_traffic",
        vec![
            Rule {
                id: RuleId("m17"),
                value: Lts::Lts1,
                matches: |edge, _| edge.tag_is("motor_vehicle", "no"),
            },
            Rule {
                id: RuleId("m13"),
                value: Lts::Lts1,
                matches: |edge, _| edge.tag_is("highway", "pedestrian"),
            },
            Rule {
                id: RuleId("m14"),
                value: Lts::Lts2,
                matches: |edge, _| {
                    edge.tag_is("highway", "footway") && edge.tag_is("footway", "crossing")
                },
            },
            Rule {
                id: RuleId("m2"),
                value: Lts::Lts2,
                matches: |edge, _| {
                    edge.tag_is("highway", "service") && edge.tag_is("service", "alley")
                },
            },
            Rule {
                id: RuleId("m15"),
                value: Lts::Lts2,
                matches: |edge, _| edge.tag_is("highway", "track"),
            },
            Rule {
                id: RuleId("m3"),
                value: Lts::Lts2,
                matches: |edge, r| {
                    r.speed <= 50
                        && edge.tag_is("highway", "service")
                        && edge.tag_is("service", "parking_aisle")
                },
            },
            Rule {
                id: RuleId("m4"),
                value: Lts::Lts2,
                matches: |edge, r| {
                    r.speed <= 50
                        && edge.tag_is("highway", "service")
                        && edge.tag_is("service", "driveway")
                },
            },
            Rule {
                id: RuleId("m16"),
                value: Lts::Lts2,
                matches: |edge, r| r.speed <= 35 && edge.tag_is("highway", "service"),
            },
            Rule {
                id: RuleId("m5"),
                value: Lts::Lts2,
                matches: |edge, r| {
                    r.speed <= 40 && r.lanes <= 3 && edge.tag_is("highway", "residential")
                },
            },
            Rule {
                id: RuleId("m6"),
                value: Lts::Lts3,
                matches: |_, r| r.speed <= 40 && r.lanes <= 3,
            },
            Rule {
                id: RuleId("m7"),
                value: Lts::Lts3,
                matches: |_, r| r.speed <= 40 && r.lanes <= 5,
            },
            Rule {
                id: RuleId("m8"),
                value: Lts::Lts4,
                matches: |_, r| r.speed <= 40 && r.lanes > 5,
            },
            Rule {
                id: RuleId("m9"),
                value: Lts::Lts2,
                matches: |edge, r| {
                    r.speed <= 50 && r.lanes < 3 && edge.tag_is("highway", "residential")
                },
            },
            Rule {
                id: RuleId("m10"),
                value: Lts::Lts3,
                matches: |_, r| r.speed <= 50 && r.lanes <= 3,
            },
            Rule {
                id: RuleId("m11"),
                value: Lts::Lts4,
                matches: |_, r| r.speed <= 50 && r.lanes > 3,
            },
            Rule {
                id: RuleId("m12"),
                value: Lts::Lts4,
                matches: |_, r| r.speed > 50,
            },
        ],
    )
}

/// Score mixed-traffic edges.
pub fn score_mixed_traffic(
    edges: Vec<EdgeRecord>,
    config: &ClassifyConfig,
) -> Result<Vec<ScoredEdge>, Error> {
    let table = rules();
    edges
        .into_par_iter()
        .map(|edge| {
            let resolved = resolve_attributes(&edge, config, WidthHandling::Coerce)?;
            let (rule, lts) = table.outcome(&edge, &resolved)?;
            Ok(ScoredEdge { edge, rule, lts })
        })
        .collect()
}
