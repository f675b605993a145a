use crate::currency::CurrencyConverter;
use crate::discount::evaluate_bulk_discounts;
use crate::quality::score_quality;
use crate::round2;
use quotis_shared::{Currency, PricingFacts, PricingRequest, RawPriceRecord};

/// Turns one raw price record plus a request into the full set of derived
/// pricing facts. Pure apart from the injected rate table; no I/O and no
/// caching happen here.
#[derive(Clone)]
pub struct PricingCalculator {
    converter: CurrencyConverter,
}

impl PricingCalculator {
    pub fn new(converter: CurrencyConverter) -> Self {
        Self { converter }
    }

    /// Compute facts from the primary record. `candidates` is the full
    /// eligible list (primary included) used for quality scoring. Callers
    /// must have established that at least one eligible record exists.
    pub fn compute(
        &self,
        primary: &RawPriceRecord,
        request: &PricingRequest,
        candidates: &[RawPriceRecord],
    ) -> PricingFacts {
        let quantity_unit = primary.quantity_unit();
        let quantity = request.quantity as f64;
        let factor = quantity * quantity_unit;

        let unit_gross = primary.sale_unit_price_gross.unwrap_or(0.0);
        let unit_net = primary.sale_unit_price_net;

        let gross_total = round2(unit_gross * factor);
        let net_total = round2(unit_net * factor);
        let deposit_gross_total = round2(primary.deposit_unit_price_gross * factor);
        let deposit_net_total = round2(primary.deposit_unit_price_net * factor);

        let vat_amount = round2(gross_total - net_total);

        // Zero or missing net must yield 0, never a division fault.
        let margin_percent = if unit_net > 0.0 {
            (primary.margin_absolute / unit_net * 100.0).round() as i64
        } else {
            0
        };
        let margin_unit = primary.margin_absolute;
        let margin_total = round2(margin_unit * factor);

        let bulk_discounts = evaluate_bulk_discounts(gross_total, request.quantity);
        let currency = self
            .converter
            .convert(gross_total, Currency::Eur, request.currency);
        let quality = score_quality(unit_gross, candidates);

        PricingFacts {
            unit_gross,
            unit_net,
            gross_total,
            net_total,
            deposit_gross_total,
            deposit_net_total,
            vat_amount,
            vat_rate: primary.tax_rate_percent,
            margin_unit,
            margin_total,
            margin_percent,
            bulk_discounts,
            currency,
            quality,
        }
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(CurrencyConverter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotis_shared::PriceKind;

    fn primary_record() -> RawPriceRecord {
        RawPriceRecord {
            part_id: 500,
            price_kind: PriceKind::List,
            sale_unit_price_gross: Some(119.99),
            sale_unit_price_net: 99.99,
            deposit_unit_price_gross: 0.0,
            deposit_unit_price_net: 0.0,
            tax_rate_percent: 20.0,
            margin_absolute: 20.0,
            sale_quantity_unit: Some("1".to_string()),
            available: true,
            valid_from: None,
            valid_to: None,
        }
    }

    fn request(quantity: u32) -> PricingRequest {
        PricingRequest {
            quantity,
            ..PricingRequest::for_part(500)
        }
    }

    #[test]
    fn test_single_unit_scenario() {
        let calculator = PricingCalculator::default();
        let record = primary_record();
        let candidates = vec![record.clone()];

        let facts = calculator.compute(&record, &request(1), &candidates);

        assert_eq!(facts.gross_total, 119.99);
        assert_eq!(facts.net_total, 99.99);
        assert_eq!(facts.vat_amount, 20.0);
        assert_eq!(facts.margin_percent, 20);
        assert!(facts.bulk_discounts.iter().all(|d| d.savings == 0.0));
    }

    #[test]
    fn test_fifty_unit_scenario() {
        let calculator = PricingCalculator::default();
        let record = primary_record();
        let candidates = vec![record.clone()];

        let facts = calculator.compute(&record, &request(50), &candidates);

        assert_eq!(facts.gross_total, 5999.5);
        assert_eq!(facts.bulk_discounts[0].savings, round2(5999.5 * 0.05));
        assert_eq!(facts.bulk_discounts[1].savings, 599.95);
        assert_eq!(facts.bulk_discounts[2].savings, 0.0);
    }

    #[test]
    fn test_zero_net_price_is_safe() {
        let calculator = PricingCalculator::default();
        let mut record = primary_record();
        record.sale_unit_price_net = 0.0;
        let candidates = vec![record.clone()];

        let facts = calculator.compute(&record, &request(1), &candidates);
        assert_eq!(facts.margin_percent, 0);
    }

    #[test]
    fn test_invalid_quantity_unit_defaults_to_one() {
        let calculator = PricingCalculator::default();
        let mut record = primary_record();
        record.sale_quantity_unit = Some("pallet".to_string());
        let candidates = vec![record.clone()];

        let facts = calculator.compute(&record, &request(2), &candidates);
        assert_eq!(facts.gross_total, round2(119.99 * 2.0));
    }

    #[test]
    fn test_quantity_unit_multiplies_totals() {
        let calculator = PricingCalculator::default();
        let mut record = primary_record();
        record.sale_quantity_unit = Some("10".to_string());
        let candidates = vec![record.clone()];

        let facts = calculator.compute(&record, &request(2), &candidates);
        assert_eq!(facts.gross_total, round2(119.99 * 20.0));
        assert_eq!(facts.net_total, round2(99.99 * 20.0));
    }

    #[test]
    fn test_output_is_deterministic() {
        let calculator = PricingCalculator::default();
        let record = primary_record();
        let candidates = vec![record.clone()];
        let req = request(50);

        let first = serde_json::to_string(&calculator.compute(&record, &req, &candidates)).unwrap();
        let second =
            serde_json::to_string(&calculator.compute(&record, &req, &candidates)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_deposit_totals_follow_quantity() {
        let calculator = PricingCalculator::default();
        let mut record = primary_record();
        record.deposit_unit_price_gross = 11.9;
        record.deposit_unit_price_net = 10.0;
        let candidates = vec![record.clone()];

        let facts = calculator.compute(&record, &request(3), &candidates);
        assert_eq!(facts.deposit_gross_total, round2(11.9 * 3.0));
        assert_eq!(facts.deposit_net_total, 30.0);
    }
}
