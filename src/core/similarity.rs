//! Similarity arithmetic
//!
//! Cosine similarity between embeddings and its conversion to the rounded
//! percentage shown to players.

/// Cosine similarity of two vectors, in [-1, 1]
///
/// Accumulates in `f64`. Returns 0.0 if either vector has zero norm. Extra
/// trailing components of the longer vector are ignored.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

/// Convert a raw similarity in [-1, 1] to a percentage with 2 decimals
///
/// Out-of-range input is clamped first, so the result is always in
/// [-100, 100]. Tiny negative values that round to zero come back as `0.0`,
/// never `-0.0`.
///
/// # Examples
/// ```
/// use semantic_hunter::core::similarity_percent;
///
/// assert_eq!(similarity_percent(1.0), 100.0);
/// assert_eq!(similarity_percent(0.123_456), 12.35);
/// ```
#[must_use]
pub fn similarity_percent(raw: f64) -> f64 {
    let scaled = raw.clamp(-1.0, 1.0) * 100.0;
    let percent = (scaled * 100.0).round() / 100.0;
    // -0.0 sorts below 0.0 under total_cmp and serializes as "-0.0"
    if percent == 0.0 { 0.0 } else { percent }
}
