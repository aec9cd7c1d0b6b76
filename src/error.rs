use thiserror::Error;

use crate::model::EdgeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Required column `{0}` is absent from the edge batch")]
    MissingColumn(String),
    #[error("Malformed speed value: `{0}`")]
    MalformedSpeed(String),
    #[error("Malformed lane value: `{0}`")]
    MalformedLanes(String),
    #[error("Edge {edge}: width `{value}` is not numeric")]
    MalformedWidth { edge: EdgeId, value: String },
    #[error("No rule in `{table}` matched edge {edge}")]
    UnmatchedRule { table: &'static str, edge: EdgeId },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
