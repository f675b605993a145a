use quotis_shared::{
    AlternativeOption, DiscountOpportunity, PriceTrend, PricingFacts, PricingRequest,
    RecommendationBundle,
};
use std::time::Duration;

/// Recommendation bundles are cached independently of price tier.
pub const RECOMMENDATION_TTL: Duration = Duration::from_secs(30 * 60);

/// Order-quantity breakpoints the optimal-quantity suggestion snaps to.
pub const QUANTITY_BREAKPOINTS: [u32; 5] = [1, 10, 25, 50, 100];

/// Trend and confidence are placeholder values until order-history data
/// backs them; everything here must stay deterministic.
const NEUTRAL_CONFIDENCE: u8 = 50;

/// Derives advisory data from already-computed pricing facts. The output
/// is non-authoritative: shape and bounds are contractual, exact values
/// are not.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, request: &PricingRequest, facts: &PricingFacts) -> RecommendationBundle {
        RecommendationBundle {
            optimal_quantity: optimal_quantity(request.quantity),
            trend: PriceTrend::Stable,
            discount_opportunities: discount_opportunities(request.quantity, facts),
            alternatives: alternatives(),
            stock_advice: stock_advice(facts),
            confidence_score: NEUTRAL_CONFIDENCE,
        }
    }
}

/// Nearest breakpoint within 0.8x to 1.5x of the requested quantity; ties
/// prefer the smaller breakpoint. Falls back to the request itself when no
/// breakpoint lands in the window.
fn optimal_quantity(quantity: u32) -> u32 {
    let lower = quantity as f64 * 0.8;
    let upper = quantity as f64 * 1.5;

    QUANTITY_BREAKPOINTS
        .iter()
        .copied()
        .filter(|bp| {
            let bp = *bp as f64;
            bp >= lower && bp <= upper
        })
        .min_by(|a, b| {
            a.abs_diff(quantity)
                .cmp(&b.abs_diff(quantity))
                .then(a.cmp(b))
        })
        .unwrap_or(quantity)
}

/// Bulk tiers the request has not reached yet, phrased as opportunities.
fn discount_opportunities(quantity: u32, facts: &PricingFacts) -> Vec<DiscountOpportunity> {
    facts
        .bulk_discounts
        .iter()
        .filter(|tier| tier.min_qty > quantity)
        .map(|tier| DiscountOpportunity {
            min_qty: tier.min_qty,
            rate: tier.rate,
            additional_units: tier.min_qty - quantity,
            message: format!(
                "Order {} more units to unlock {:.0}% off",
                tier.min_qty - quantity,
                tier.rate * 100.0
            ),
        })
        .collect()
}

fn alternatives() -> Vec<AlternativeOption> {
    vec![
        AlternativeOption {
            label: "equivalent".to_string(),
            description: "OEM-equivalent part from an alternate supplier".to_string(),
        },
        AlternativeOption {
            label: "remanufactured".to_string(),
            description: "Remanufactured unit with deposit on the returned core".to_string(),
        },
    ]
}

fn stock_advice(facts: &PricingFacts) -> String {
    if facts.quality.candidate_count >= 3 {
        "Multiple suppliers quote this part; standard lead times expected".to_string()
    } else {
        "Limited supplier coverage; confirm availability before committing".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotis_catalog::PricingCalculator;
    use quotis_shared::{PriceKind, RawPriceRecord};

    fn facts_for(quantity: u32, candidates: usize) -> (PricingRequest, PricingFacts) {
        let record = RawPriceRecord {
            part_id: 42,
            price_kind: PriceKind::List,
            sale_unit_price_gross: Some(50.0),
            sale_unit_price_net: 42.02,
            deposit_unit_price_gross: 0.0,
            deposit_unit_price_net: 0.0,
            tax_rate_percent: 19.0,
            margin_absolute: 8.0,
            sale_quantity_unit: None,
            available: true,
            valid_from: None,
            valid_to: None,
        };
        let pool: Vec<RawPriceRecord> = (0..candidates)
            .map(|i| {
                let mut r = record.clone();
                r.sale_unit_price_gross = Some(50.0 + i as f64);
                r
            })
            .collect();
        let request = PricingRequest {
            quantity,
            ..PricingRequest::for_part(42)
        };
        let facts = PricingCalculator::default().compute(&record, &request, &pool);
        (request, facts)
    }

    #[test]
    fn test_optimal_quantity_is_breakpoint_or_input() {
        for quantity in [1u32, 3, 8, 11, 19, 24, 40, 70, 99, 500] {
            let suggested = optimal_quantity(quantity);
            assert!(
                QUANTITY_BREAKPOINTS.contains(&suggested) || suggested == quantity,
                "quantity {quantity} suggested {suggested}"
            );
        }
    }

    #[test]
    fn test_optimal_quantity_respects_window() {
        // 8 * 0.8 = 6.4, 8 * 1.5 = 12 -> only breakpoint 10 qualifies.
        assert_eq!(optimal_quantity(8), 10);
        // Nothing between 2.4 and 4.5.
        assert_eq!(optimal_quantity(3), 3);
    }

    #[test]
    fn test_bundle_bounds() {
        let engine = RecommendationEngine::new();
        let (request, facts) = facts_for(5, 4);
        let bundle = engine.recommend(&request, &facts);

        assert!(bundle.confidence_score <= 100);
        assert!(!bundle.alternatives.is_empty());
        assert!(!bundle.stock_advice.is_empty());
        assert!(bundle
            .discount_opportunities
            .iter()
            .all(|opp| opp.min_qty > request.quantity));
    }

    #[test]
    fn test_opportunities_shrink_as_quantity_grows() {
        let engine = RecommendationEngine::new();
        let (small_req, small_facts) = facts_for(5, 2);
        let (large_req, large_facts) = facts_for(60, 2);

        let small = engine.recommend(&small_req, &small_facts);
        let large = engine.recommend(&large_req, &large_facts);
        assert_eq!(small.discount_opportunities.len(), 3);
        assert_eq!(large.discount_opportunities.len(), 1);
    }

    #[test]
    fn test_bundle_is_deterministic() {
        let engine = RecommendationEngine::new();
        let (request, facts) = facts_for(12, 3);
        assert_eq!(
            engine.recommend(&request, &facts),
            engine.recommend(&request, &facts)
        );
    }
}
