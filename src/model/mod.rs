//! Data model for edge classification
//!
//! Edge records, tag values, the recognized-key schema, and the
//! classification outputs.

pub mod edge;
pub mod schema;

pub use edge::{EdgeId, EdgeRecord, Lts, RuleId, ScoredEdge, TagValue, TaggedEdge};
pub use schema::TagSchema;
