//! Level of Traffic Stress (LTS) classification for street-network edges.
//!
//! Rates each road segment of a street network on the 1 (all ages and
//! abilities) to 4 (confident cyclists only) stress scale used in
//! bikeability analysis, from the segment's OSM tag attributes alone —
//! no geometry, no topology.
//!
//! The whole model is a cascade of first-match rule tables: a permission
//! filter, a separated-path classifier, bike-lane and parking detection,
//! and one of three scoring cascades per edge. Rule semantics follow the
//! Bike Ottawa stress model lineage.
//!
//! ```
//! use velostress::{ClassifyConfig, EdgeRecord, classify_network};
//!
//! let edges = vec![
//!     EdgeRecord::new(1).with_tag("highway", "residential"),
//!     EdgeRecord::new(2).with_tag("highway", "cycleway"),
//!     EdgeRecord::new(3).with_tag("highway", "motorway"),
//! ];
//! let result = classify_network(edges, &ClassifyConfig::default()).unwrap();
//! assert_eq!(result.mixed[0].lts.level(), 2);
//! assert_eq!(result.separated[0].lts.level(), 1);
//! assert_eq!(result.not_permitted[0].rule.0, "p3");
//! ```

pub mod classify;
pub mod error;
pub mod model;
pub mod normalize;
pub mod prelude;
pub mod rules;

pub use classify::{ClassifyConfig, NetworkClassification, classify_network};
pub use error::Error;
pub use model::{EdgeId, EdgeRecord, Lts, RuleId, ScoredEdge, TagSchema, TagValue, TaggedEdge};
