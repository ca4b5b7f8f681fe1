use std::fmt;

use serde::{Deserialize, Serialize};

/// Insight identifiers arrive from JSON as either integers or strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InsightId {
    Int(i64),
    Text(String),
}

impl fmt::Display for InsightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightId::Int(id) => write!(f, "{id}"),
            InsightId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// A candidate record with its precomputed embedding. The embedding
/// lifecycle belongs to the caller.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Insight {
    pub id: InsightId,
    pub text: String,
    pub embedding: Vec<f32>,
}

/// Per-request ranking result, discarded after response formatting.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScoredInsight {
    pub id: InsightId,
    pub text: String,
    pub similarity: f32,
}
