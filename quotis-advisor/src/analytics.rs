use quotis_catalog::round2;
use quotis_shared::{MarketPosition, PriceAnalytics, RawPriceRecord};
use std::time::Duration;

/// Analytics sit between the standard price TTL and the recommendation TTL.
pub const ANALYTICS_TTL: Duration = Duration::from_secs(15 * 60);

/// Deltas inside this band count as at-market.
const AT_MARKET_BAND_PERCENT: f64 = 1.0;

/// Compare the chosen gross price against the candidate set. The candidate
/// set stands in for a market feed; a real integration would replace this
/// function body without changing its signature.
pub fn assess_market(chosen_gross: f64, candidates: &[RawPriceRecord]) -> PriceAnalytics {
    let prices: Vec<f64> = candidates
        .iter()
        .filter_map(|record| record.sale_unit_price_gross)
        .collect();
    let sample_size = prices.len();

    let market_average = if sample_size > 0 {
        round2(prices.iter().sum::<f64>() / sample_size as f64)
    } else {
        0.0
    };

    let delta_percent = if market_average > 0.0 {
        round2((chosen_gross - market_average) / market_average * 100.0)
    } else {
        0.0
    };

    let position = if delta_percent <= -AT_MARKET_BAND_PERCENT {
        MarketPosition::BelowMarket
    } else if delta_percent >= AT_MARKET_BAND_PERCENT {
        MarketPosition::AboveMarket
    } else {
        MarketPosition::AtMarket
    };

    PriceAnalytics {
        market_average,
        delta_percent,
        position,
        sample_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotis_shared::PriceKind;

    fn record(gross: f64) -> RawPriceRecord {
        RawPriceRecord {
            part_id: 9,
            price_kind: PriceKind::Base,
            sale_unit_price_gross: Some(gross),
            sale_unit_price_net: gross,
            deposit_unit_price_gross: 0.0,
            deposit_unit_price_net: 0.0,
            tax_rate_percent: 19.0,
            margin_absolute: 0.0,
            sale_quantity_unit: None,
            available: true,
            valid_from: None,
            valid_to: None,
        }
    }

    #[test]
    fn test_cheapest_sits_below_market() {
        let candidates = vec![record(10.0), record(20.0), record(30.0)];
        let analytics = assess_market(10.0, &candidates);
        assert_eq!(analytics.market_average, 20.0);
        assert_eq!(analytics.delta_percent, -50.0);
        assert_eq!(analytics.position, MarketPosition::BelowMarket);
        assert_eq!(analytics.sample_size, 3);
    }

    #[test]
    fn test_single_candidate_is_at_market() {
        let candidates = vec![record(42.5)];
        let analytics = assess_market(42.5, &candidates);
        assert_eq!(analytics.delta_percent, 0.0);
        assert_eq!(analytics.position, MarketPosition::AtMarket);
    }

    #[test]
    fn test_empty_candidates_are_neutral() {
        let analytics = assess_market(10.0, &[]);
        assert_eq!(analytics.market_average, 0.0);
        assert_eq!(analytics.delta_percent, 0.0);
        assert_eq!(analytics.position, MarketPosition::AtMarket);
        assert_eq!(analytics.sample_size, 0);
    }
}
