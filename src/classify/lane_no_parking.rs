//! Scorer for edges with a bike lane and no adjacent parking.
//!
//! Without a door zone the thresholds relax: higher speeds stay tolerable
//! and only a genuinely narrow lane (under 1.7 m) raises the score on its
//! own. Textual `width` values are coerced to missing before scoring.

use rayon::prelude::*;

use crate::classify::{ClassifyConfig, WidthHandling, resolve_attributes};
use crate::error::Error;
use crate::model::{EdgeRecord, Lts, RuleId, ScoredEdge, TagSchema};
use crate::rules::{Resolved, Rule, RuleSet};

/// The c-cascade in priority order; the catch-all c1 is LTS 1.
pub fn rules() -> RuleSet<Resolved, Lts> {
    RuleSet::new(
        "lane_no_parking",
        vec![
            Rule {
                id: RuleId("c3"),
                value: Lts::Lts3,
                matches: |_, r: &Resolved| r.lanes >= 3 && r.speed <= 65,
            },
            Rule {
                id: RuleId("c4"),
                value: Lts::Lts2,
                matches: |_, r| r.width.is_some_and(|w| w <= 1.7),
            },
            Rule {
                id: RuleId("c5"),
                value: Lts::Lts3,
                matches: |_, r| r.speed > 50 && r.speed <= 65,
            },
            Rule {
                id: RuleId("c6"),
                value: Lts::Lts4,
                matches: |_, r| r.speed > 65,
            },
            Rule {
                id: RuleId("c7"),
                value: Lts::Lts3,
                matches: |edge, _| !edge.tag_is("highway", "residential"),
            },
        ],
    )
    .with_fallback(RuleId("c1"), Lts::Lts1)
}

/// Score lane-without-parking edges.
pub fn score_lane_no_parking(
    edges: Vec<EdgeRecord>,
    config: &ClassifyConfig,
) -> Result<Vec<ScoredEdge>, Error> {
    TagSchema::require_key_in_batch(&edges, &config.schema.width_key)?;
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
