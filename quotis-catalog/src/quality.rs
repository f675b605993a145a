use quotis_shared::{QualityScore, QualityTier, RawPriceRecord};
use std::cmp::Ordering;

/// Rank the chosen gross price among all eligible candidate prices for the
/// same part. Lower prices rank better; with a single candidate no ranking
/// is meaningful and the score is pinned to 100.
pub fn score_quality(chosen_gross: f64, candidates: &[RawPriceRecord]) -> QualityScore {
    let mut prices: Vec<f64> = candidates
        .iter()
        .filter_map(|record| record.sale_unit_price_gross)
        .collect();
    let candidate_count = prices.len();

    if candidate_count <= 1 {
        return QualityScore {
            score: 100,
            tier: QualityTier::Excellent,
            rank: 0,
            candidate_count,
        };
    }

    prices.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let rank = prices
        .iter()
        .position(|price| (price - chosen_gross).abs() < 1e-9)
        .unwrap_or(candidate_count - 1);

    let score = ((1.0 - rank as f64 / candidate_count as f64) * 100.0).round() as u8;
    QualityScore {
        score,
        tier: QualityTier::for_score(score),
        rank,
        candidate_count,
    }
}
