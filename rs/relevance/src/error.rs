use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error("Embedding dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Zero-norm embedding vector")]
    ZeroNormVector,
}
