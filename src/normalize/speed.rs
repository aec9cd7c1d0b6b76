//! Speed limit resolution and parsing.
//!
//! OSM `maxspeed` values are strings: a bare number is km/h, otherwise a
//! unit follows the number (`35 mph`, `10 knots`), and the literal
//! `national` defers to a jurisdiction-wide default. When the tag is absent
//! entirely, a default keyed on the highway class stands in. The defaults
//! err on the high end, which errs toward higher stress.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::{EdgeRecord, TagSchema, TagValue};
use crate::normalize::units::knots_to_mph;

/// Assumed speed limits on the km/h scale, used when `maxspeed` is absent
/// or `national`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedDefaultsKph {
    pub national: u32,
    pub local: u32,
    pub motorway: u32,
    pub primary: u32,
    pub secondary: u32,
}

impl Default for SpeedDefaultsKph {
    fn default() -> Self {
        Self {
            national: 40,
            local: 50,
            motorway: 100,
            primary: 80,
            secondary: 80,
        }
    }
}

/// Assumed speed limits on the mph scale for US networks, keyed on highway
/// class only. There is no `national` token handling and no generic local
/// fallback: a missing speed on any other highway class stays unresolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedDefaultsMph {
    pub motorway: u32,
    pub primary: u32,
    pub secondary: u32,
    pub tertiary: u32,
    pub residential: u32,
}

impl Default for SpeedDefaultsMph {
    fn default() -> Self {
        Self {
            motorway: 80,
            primary: 60,
            secondary: 35,
            tertiary: 35,
            residential: 25,
        }
    }
}

/// Resolve an edge's assumed speed limit (km/h scale).
///
/// `national` maps to the national default; an absent tag (or the NaN
/// missing marker) maps to the default for the edge's highway class, or
/// the local default. A present tag must be numeric (multi-valued tags
/// resolve to their maximum); non-numeric text is a malformed value and
/// propagates as an error.
pub fn resolve_max_speed(
    edge: &EdgeRecord,
    schema: &TagSchema,
    defaults: &SpeedDefaultsKph,
) -> Result<u32, Error> {
    match edge.tag(&schema.maxspeed_key).filter(|v| !v.is_missing()) {
        Some(value) if value.as_str() == Some("national") => Ok(defaults.national),
        Some(value) => max_numeric(value).ok_or_else(|| malformed_speed(edge, value)),
        None => Ok(match edge.tag_str("highway") {
            Some("motorway") => defaults.motorway,
            Some("primary") => defaults.primary,
            Some("secondary") => defaults.secondary,
            _ => defaults.local,
        }),
    }
}

/// US variant of [`resolve_max_speed`] (mph scale). Returns `None` when the
/// tag is absent and the highway class carries no default.
pub fn resolve_max_speed_us(
    edge: &EdgeRecord,
    schema: &TagSchema,
    defaults: &SpeedDefaultsMph,
) -> Result<Option<u32>, Error> {
    match edge.tag(&schema.maxspeed_key).filter(|v| !v.is_missing()) {
        Some(value) => max_numeric(value)
            .map(Some)
            .ok_or_else(|| malformed_speed(edge, value)),
        None => Ok(match edge.tag_str("highway") {
            Some("motorway") => Some(defaults.motorway),
            Some("primary") => Some(defaults.primary),
            Some("secondary") => Some(defaults.secondary),
            Some("tertiary") => Some(defaults.tertiary),
            Some("residential") => Some(defaults.residential),
            _ => None,
        }),
    }
}

fn malformed_speed(edge: &EdgeRecord, value: &TagValue) -> Error {
    Error::MalformedSpeed(format!("edge {}: `{}`", edge.id, describe(value)))
}

/// Parse a raw `maxspeed` value into a float, interpreting units.
///
/// A number with an `mph` suffix is returned as-is, `knots` converts to
/// mph, and a bare number is returned unconverted (km/h by OSM convention;
/// the caller decides whether to convert further). Absent input propagates
/// as `None`; malformed text is an error, never silently swallowed.
pub fn parse_speed(value: Option<&TagValue>) -> Result<Option<f64>, Error> {
    let Some(value) = value else { return Ok(None) };
    match value {
        TagValue::Number(n) if n.is_nan() => Ok(None),
        TagValue::Number(n) => Ok(Some(*n)),
        TagValue::Text(s) if s.contains("mph") => leading_number(s)
            .map(Some)
            .ok_or_else(|| Error::MalformedSpeed(s.clone())),
        TagValue::Text(s) if s.contains("knots") => leading_number(s)
            .map(knots_to_mph)
            .map(Some)
            .ok_or_else(|| Error::MalformedSpeed(s.clone())),
        TagValue::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::MalformedSpeed(s.clone())),
        TagValue::List(_) => Err(Error::MalformedSpeed(describe(value))),
    }
}

/// Apply [`parse_speed`] across a batch, yielding the derived numeric
/// column aligned with the input by index. A malformed value fails the
/// batch naming the offending edge.
pub fn clean_speeds(edges: &[EdgeRecord], key: &str) -> Result<Vec<Option<f64>>, Error> {
    edges
        .iter()
        .map(|edge| {
            parse_speed(edge.tag(key)).map_err(|err| match err {
                Error::MalformedSpeed(value) => {
                    Error::MalformedSpeed(format!("edge {}: `{value}`", edge.id))
                }
                other => other,
            })
        })
        .collect()
}

fn leading_number(s: &str) -> Option<f64> {
    s.split_whitespace().next()?.parse::<f64>().ok()
}

/// Largest numeric scalar of a possibly multi-valued tag, or `None` when
/// any scalar fails to parse.
fn max_numeric(value: &TagValue) -> Option<u32> {
    let mut max: Option<u32> = None;
    for scalar in value.scalars() {
        let n = match scalar {
            TagValue::Number(n) if n.is_finite() && *n >= 0.0 => *n,
            TagValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)?,
            _ => return None,
        };
        let n = n as u32;
        max = Some(max.map_or(n, |m| m.max(n)));
    }
    max
}

fn describe(value: &TagValue) -> String {
    match value {
        TagValue::Text(s) => s.clone(),
        other => format!("{other:?}"),
    }
}
