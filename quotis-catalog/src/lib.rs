pub mod calculator;
pub mod currency;
pub mod discount;
pub mod quality;

pub use calculator::PricingCalculator;
pub use currency::{CurrencyConverter, ExchangeRates, StaticRates};
pub use discount::{evaluate_bulk_discounts, BULK_TIERS};
pub use quality::score_quality;

/// Round a monetary amount to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.346), 2.35);
        assert_eq!(round2(10.125), 10.13);
        assert_eq!(round2(5999.5), 5999.5);
    }
}
