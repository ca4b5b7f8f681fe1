pub mod error;
pub mod rank;
pub mod types;

pub use crate::error::RankingError;
pub use crate::rank::{cosine_similarity, rank};
pub use crate::types::{Insight, InsightId, ScoredInsight};
