use crate::round2;
use quotis_shared::{Currency, CurrencyConversion};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Rate table seam. Real deployments plug an exchange-rate feed in here;
/// the engine itself only ever sees this trait.
pub trait ExchangeRates: Send + Sync {
    /// Units of `target` per one unit of `base`. `None` when the pair is
    /// not quoted.
    fn rate(&self, base: Currency, target: Currency) -> Option<f64>;
}

/// EUR-based static rate table, loadable from configuration.
#[derive(Debug, Clone)]
pub struct StaticRates {
    eur_to: BTreeMap<Currency, f64>,
}

impl StaticRates {
    pub fn new(usd_per_eur: f64, gbp_per_eur: f64) -> Self {
        let mut eur_to = BTreeMap::new();
        eur_to.insert(Currency::Usd, usd_per_eur);
        eur_to.insert(Currency::Gbp, gbp_per_eur);
        Self { eur_to }
    }

    /// A table with no quoted pairs, forcing identity-rate degradation.
    pub fn empty() -> Self {
        Self {
            eur_to: BTreeMap::new(),
        }
    }
}

impl Default for StaticRates {
    fn default() -> Self {
        Self::new(1.09, 0.85)
    }
}

impl ExchangeRates for StaticRates {
    fn rate(&self, base: Currency, target: Currency) -> Option<f64> {
        if base == target {
            return Some(1.0);
        }
        if base != Currency::Eur {
            return None;
        }
        self.eur_to.get(&target).copied()
    }
}

/// Converts base-currency amounts into the requested currency. A missing
/// rate degrades to the identity rate so a price response stays producible.
#[derive(Clone)]
pub struct CurrencyConverter {
    rates: Arc<dyn ExchangeRates>,
}

impl CurrencyConverter {
    pub fn new(rates: Arc<dyn ExchangeRates>) -> Self {
        Self { rates }
    }

    pub fn convert(&self, amount: f64, base: Currency, target: Currency) -> CurrencyConversion {
        let mut amounts = BTreeMap::new();
        amounts.insert(base, round2(amount));

        if target == base {
            return CurrencyConversion {
                base,
                target,
                rate_used: 1.0,
                amounts,
            };
        }

        let rate_used = self.rates.rate(base, target).unwrap_or(1.0);
        amounts.insert(target, round2(amount * rate_used));
        CurrencyConversion {
            base,
            target,
            rate_used,
            amounts,
        }
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new(Arc::new(StaticRates::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_target_is_base() {
        let converter = CurrencyConverter::default();
        let conv = converter.convert(119.99, Currency::Eur, Currency::Eur);
        assert_eq!(conv.rate_used, 1.0);
        assert_eq!(conv.amounts.len(), 1);
        assert_eq!(conv.amounts[&Currency::Eur], 119.99);
    }

    #[test]
    fn test_conversion_rounds_to_cents() {
        let converter = CurrencyConverter::new(Arc::new(StaticRates::new(1.09, 0.85)));
        let conv = converter.convert(100.0, Currency::Eur, Currency::Usd);
        assert_eq!(conv.rate_used, 1.09);
        assert_eq!(conv.amounts[&Currency::Usd], 109.0);
        assert_eq!(conv.amounts[&Currency::Eur], 100.0);
    }

    #[test]
    fn test_missing_rate_degrades_to_identity() {
        let converter = CurrencyConverter::new(Arc::new(StaticRates::empty()));
        let conv = converter.convert(50.0, Currency::Eur, Currency::Gbp);
        assert_eq!(conv.rate_used, 1.0);
        assert_eq!(conv.amounts[&Currency::Gbp], 50.0);
    }
}
