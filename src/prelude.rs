//! Convenience re-exports of the classification entry points

pub use crate::classify::{
    ClassifyConfig, NetworkClassification, classify_network, score_lane_no_parking,
    score_lane_with_parking, score_mixed_traffic, split_bike_lane, split_parking,
    split_permitted, split_separated,
};
pub use crate::error::Error;
pub use crate::model::{
    EdgeId, EdgeRecord, Lts, RuleId, ScoredEdge, TagSchema, TagValue, TaggedEdge,
};
pub use crate::normalize::{
    SpeedDefaultsKph, SpeedDefaultsMph, clean_speeds, parse_speed, resolve_lanes,
    resolve_max_speed, resolve_max_speed_us,
};
