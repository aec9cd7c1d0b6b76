//! Classification stages.
//!
//! Splitters route each edge to exactly one of four terminal partitions
//! (not permitted, separated, lane-scored, mixed traffic); the scorers
//! assign the final stress level. [`pipeline`] chains the stages.

pub mod bike_lane;
pub mod lane_no_parking;
pub mod lane_with_parking;
pub mod mixed_traffic;
pub mod parking;
pub mod permitted;
pub mod pipeline;
pub mod separation;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{EdgeRecord, Lts, TagSchema};
use crate::normalize::{
    SpeedDefaultsKph, numeric_width, numeric_width_strict, resolve_lanes, resolve_max_speed,
};
use crate::rules::Resolved;

pub use bike_lane::split_bike_lane;
pub use lane_no_parking::score_lane_no_parking;
pub use lane_with_parking::score_lane_with_parking;
pub use mixed_traffic::score_mixed_traffic;
pub use parking::split_parking;
pub use permitted::split_permitted;
pub use pipeline::{NetworkClassification, classify_network};
pub use separation::split_separated;

/// Configuration for the classification pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    pub schema: TagSchema,
    /// Assumed speed limits, km/h scale (the scale the scoring thresholds
    /// were written against).
    pub speeds: SpeedDefaultsKph,
    /// Lane count assumed when `lanes` is untagged.
    pub default_lanes: u32,
    /// Stress level assigned to separated paths. The rule cascades define
    /// no score for them; published LTS methodology rates physically
    /// separated infrastructure LTS 1, so that is the default, but it is
    /// configuration rather than a hard-wired constant.
    pub separated_lts: Lts,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            schema: TagSchema::default(),
            speeds: SpeedDefaultsKph::default(),
            default_lanes: 2,
            separated_lts: Lts::Lts1,
        }
    }
}

impl ClassifyConfig {
    pub fn validate(&self) -> Result<(), Error> {
        self.schema.validate()?;
        if self.default_lanes == 0 {
            return Err(Error::InvalidConfig(
                "default lane count must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// How a scorer treats a textual `width` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WidthHandling {
    /// Coerce to missing.
    Coerce,
    /// Fail the batch with a malformed-value error.
    Strict,
}

/// Resolve the numeric attributes a scorer needs for one edge.
fn resolve_attributes(
    edge: &EdgeRecord,
    config: &ClassifyConfig,
    width: WidthHandling,
) -> Result<Resolved, Error> {
    Ok(Resolved {
        lanes: resolve_lanes(edge, &config.schema, config.default_lanes)?,
        speed: resolve_max_speed(edge, &config.schema, &config.speeds)?,
        width: match width {
            WidthHandling::Coerce => numeric_width(edge, &config.schema),
            WidthHandling::Strict => numeric_width_strict(edge, &config.schema)?,
        },
    })
}
