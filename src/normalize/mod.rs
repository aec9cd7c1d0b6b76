//! Attribute normalizers consumed by the scorers.
//!
//! All defaults live in explicit configuration structs with unit-suffixed
//! names; there is no process-wide state and no silent substitution for
//! malformed values — defaults stand in for genuinely missing tags only.

pub mod lanes;
pub mod speed;
pub mod units;

use crate::error::Error;
use crate::model::{EdgeRecord, TagSchema, TagValue};

pub use lanes::resolve_lanes;
pub use speed::{
    SpeedDefaultsKph, SpeedDefaultsMph, clean_speeds, parse_speed, resolve_max_speed,
    resolve_max_speed_us,
};

/// The edge's width in meters when it is a genuine number; textual widths
/// are coerced to missing.
pub fn numeric_width(edge: &EdgeRecord, schema: &TagSchema) -> Option<f64> {
    edge.tag(&schema.width_key)
        .and_then(TagValue::as_number)
        .filter(|w| !w.is_nan())
}

/// As [`numeric_width`], but a textual width is a malformed value rather
/// than a missing one.
pub fn numeric_width_strict(
    edge: &EdgeRecord,
    schema: &TagSchema,
) -> Result<Option<f64>, Error> {
    match edge.tag(&schema.width_key) {
        None => Ok(None),
        Some(TagValue::Number(w)) if w.is_nan() => Ok(None),
        Some(TagValue::Number(w)) => Ok(Some(*w)),
        Some(other) => Err(Error::MalformedWidth {
            edge: edge.id,
            value: match other {
                TagValue::Text(s) => s.clone(),
                other => format!("{other:?}"),
            },
        }),
    }
}
