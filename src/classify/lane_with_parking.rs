//! Scorer for edges with a bike lane and adjacent parking.
//!
//! With cars stored next to the lane the effective lane width and the
//! door zone dominate: narrow combined widths and multilane roads push
//! the score up even at moderate speeds.

use rayon::prelude::*;

use crate::classify::{ClassifyConfig, WidthHandling, resolve_attributes};
use crate::error::Error;
use crate::model::{EdgeRecord, Lts, RuleId, ScoredEdge, TagSchema};
use crate::rules::{Resolved, Rule, RuleSet};

/// The b-cascade in priority order; the catch-all b1 is LTS 1.
pub fn rules() -> RuleSet<Resolved, Lts> {
    RuleSet::new(
        "lane_with_parking",
        vec![
            Rule {
                id: RuleId("b2"),
                value: Lts::Lts3,
                matches: |_, r: &Resolved| r.lanes >= 3 && r.speed <= 55,
            },
            Rule {
                id: RuleId("b3"),
                value: Lts::Lts3,
                matches: |_, r| r.width.is_some_and(|w| w <= 4.1),
            },
            Rule {
                id: RuleId("b4"),
                value: Lts::Lts2,
                matches: |_, r| r.width.is_some_and(|w| w <= 4.25),
            },
            Rule {
                id: RuleId("b5"),
                value: Lts::Lts2,
                matches: |edge, r| {
                    r.width.is_some_and(|w| w <= 4.5)
                        && r.speed <= 40
                        && edge.tag_is("highway", "residential")
                },
            },
            Rule {
                id: RuleId("b6"),
                value: Lts::Lts2,
                matches: |_, r| r.speed > 40 && r.speed <= 50,
            },
            Rule {
                id: RuleId("b7"),
                value: Lts::Lts3,
                matches: |_, r| r.speed > 50 && r.speed <= 55,
            },
            Rule {
                id: RuleId("b8"),
                value: Lts::Lts4,
                matches: |_, r| r.speed > 55,
            },
            Rule {
                id: RuleId("b9"),
                value: Lts::Lts3,
                matches: |edge, _| !edge.tag_is("highway", "residential"),
            },
        ],
    )
    .with_fallback(RuleId("b1"), Lts::Lts1)
}

/// Score lane-with-parking edges. A textual width is a malformed value
/// here; only the no-parking scorer coerces widths.
pub fn score_lane_with_parking(
    edges: Vec<EdgeRecord>,
    config: &ClassifyConfig,
) -> Result<Vec<ScoredEdge>, Error> {
    TagSchema::require_key_in_batch(&edges, &config.schema.width_key)?;
    let table = rules();
    edges
        .into_par_iter()
        .map(|edge| {
            let resolved = resolve_attributes(&edge, config, WidthHandling::Strict)?;
            let (rule, lts) = table.outcome(&edge, &resolved)?;
            Ok(ScoredEdge { edge, rule, lts })
        })
        .collect()
}
