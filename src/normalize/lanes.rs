//! Lane count resolution

use crate::error::Error;
use crate::model::{EdgeRecord, TagSchema, TagValue};

/// Resolve an edge's assumed lane count.
///
/// A missing tag (or the NaN missing marker) takes the configured
/// default. Multi-valued tags resolve to their maximum; this usually
/// means adjacent ways were merged into one edge and one of them carries
/// a turning lane. Non-numeric text is a malformed value and propagates
/// as an error naming the edge.
pub fn resolve_lanes(
    edge: &EdgeRecord,
    schema: &TagSchema,
    default_lanes: u32,
) -> Result<u32, Error> {
    let Some(value) = edge.tag(&schema.lanes_key).filter(|v| !v.is_missing()) else {
        return Ok(default_lanes);
    };

    let malformed = |detail: &str| Error::MalformedLanes(format!("edge {}: `{detail}`", edge.id));

    let mut max: Option<u32> = None;
    for scalar in value.scalars() {
        let n = match scalar {
            TagValue::Number(n) if n.is_finite() && *n >= 0.0 => *n as u32,
            TagValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n as u32)
                .ok_or_else(|| malformed(s))?,
            other => return Err(malformed(&format!("{other:?}"))),
        };
        max = Some(max.map_or(n, |m| m.max(n)));
    }
    max.ok_or_else(|| malformed("empty value list"))
}
