//! Full classification pipeline.
//!
//! Chains the splitters and scorers over one edge batch. The four
//! terminal partitions stay separate in the result; remerging them into a
//! single table (and everything upstream of the batch — graph download,
//! graph construction) is the caller's concern.

use log::{debug, info};

use crate::classify::{
    ClassifyConfig, score_lane_no_parking, score_lane_with_parking, score_mixed_traffic,
    split_bike_lane, split_parking, split_permitted, split_separated,
};
use crate::error::Error;
use crate::model::{EdgeRecord, ScoredEdge, TaggedEdge};

/// The four terminal partitions of a classified batch.
///
/// Their row sets are disjoint and together exhaust the input batch.
#[derive(Debug, Default)]
pub struct NetworkClassification {
    /// Edges where cycling is not permitted; carry their p-rule, no LTS.
    pub not_permitted: Vec<TaggedEdge>,
    /// Physically separated paths, scored with the configured
    /// `separated_lts` next to their s-rule.
    pub separated: Vec<ScoredEdge>,
    /// Edges with a marked bike lane, scored by the b- or c-cascade.
    pub lane: Vec<ScoredEdge>,
    /// Mixed-traffic edges, scored by the m-cascade.
    pub mixed: Vec<ScoredEdge>,
}

impl NetworkClassification {
    pub fn len(&self) -> usize {
        self.not_permitted.len() + self.separated.len() + self.lane.len() + self.mixed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run the full cascade over a batch of edges.
///
/// # Errors
///
/// Fails on invalid configuration, on malformed lane/speed/width values,
/// on a scorer batch whose schema lacks the width column, and on the
/// (unreachable by construction) unmatched-rule invariant violation.
pub fn classify_network(
    edges: Vec<EdgeRecord>,
    config: &ClassifyConfig,
) -> Result<NetworkClassification, Error> {
    config.validate()?;
    info!("Classifying {} edges", edges.len());

    let (allowed, not_permitted) = split_permitted(edges, &config.schema);
    debug!(
        "Permission filter: {} allowed, {} not allowed",
        allowed.len(),
        not_permitted.len()
    );

    // Permitted edges proceed without their p0 tag
    let allowed: Vec<EdgeRecord> = allowed.into_iter().map(|t| t.edge).collect();
    let (separated, roadway) = split_separated(allowed, &config.schema);
    debug!(
        "Separation: {} separated paths, {} roadway edges",
        separated.len(),
        roadway.len()
    );

    // The cascades define no score for separated paths; the configured
    // level (LTS 1 by default) is applied here, at the call site.
    let separated: Vec<ScoredEdge> = separated
        .into_iter()
        .map(|t| ScoredEdge {
            edge: t.edge,
            rule: t.rule,
            lts: config.separated_lts,
        })
        .collect();

    let (has_lane, no_lane) = split_bike_lane(roadway, &config.schema);
    let (parking, no_parking) = split_parking(has_lane, &config.schema);
    debug!(
        "Lane stage: {} with parking, {} without, {} mixed traffic",
        parking.len(),
        no_parking.len(),
        no_lane.len()
    );

    let mut lane = score_lane_with_parking(parking, config)?;
    lane.extend(score_lane_no_parking(no_parking, config)?);
    let mixed = score_mixed_traffic(no_lane, config)?;

    let result = NetworkClassification {
        not_permitted,
        separated,
        lane,
        mixed,
    };
    info!(
        "Classified: {} not permitted, {} separated, {} lane, {} mixed",
        result.not_permitted.len(),
        result.separated.len(),
        result.lane.len(),
        result.mixed.len()
    );
    Ok(result)
}
