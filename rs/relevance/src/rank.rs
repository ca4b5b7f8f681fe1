use crate::error::RankingError;
use crate::types::{Insight, ScoredInsight};

/// Cosine similarity of two equal-length vectors.
///
/// Fails typed instead of producing NaN: unequal lengths are a
/// `DimensionMismatch`, a zero-norm operand is a `ZeroNormVector`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, RankingError> {
    if a.len() != b.len() {
        return Err(RankingError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(RankingError::ZeroNormVector);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Score every candidate against the query embedding and return the
/// `top_k` best, descending by similarity. The sort is stable, so ties
/// keep their input order. An empty candidate list yields an empty vec.
pub fn rank(
    query: &[f32],
    candidates: &[Insight],
    top_k: usize,
) -> Result<Vec<ScoredInsight>, RankingError> {
    let mut scored = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let similarity = cosine_similarity(query, &candidate.embedding)?;
        scored.push(ScoredInsight {
            id: candidate.id.clone(),
            text: candidate.text.clone(),
            similarity,
        });
    }
    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(top_k);
    Ok(scored)
}
