use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Price tier requested by the caller. Governs cache lifetime and nothing
/// else in this engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    #[default]
    Standard,
    Premium,
    Bulk,
    Promotional,
    Contract,
}

impl PriceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::Standard => "standard",
            PriceTier::Premium => "premium",
            PriceTier::Bulk => "bulk",
            PriceTier::Promotional => "promotional",
            PriceTier::Contract => "contract",
        }
    }

    /// Cache lifetime for pricing computed under this tier.
    pub fn cache_ttl(&self) -> Duration {
        match self {
            PriceTier::Standard => Duration::from_millis(300_000),
            PriceTier::Premium => Duration::from_millis(900_000),
            PriceTier::Bulk => Duration::from_millis(1_800_000),
            PriceTier::Promotional => Duration::from_millis(120_000),
            PriceTier::Contract => Duration::from_millis(7_200_000),
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settlement currency. Records are priced in EUR; other currencies are
/// derived through the converter.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single pricing request as received from the (out-of-scope) API layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRequest {
    pub part_id: u64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub tier: PriceTier,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub include_analytics: bool,
    #[serde(default)]
    pub include_tax_breakdown: bool,
    #[serde(default)]
    pub include_discounts: bool,
}

fn default_quantity() -> u32 {
    1
}

impl PricingRequest {
    /// Request for one unit at the standard tier in EUR.
    pub fn for_part(part_id: u64) -> Self {
        Self {
            part_id,
            ..Default::default()
        }
    }
}

impl Default for PricingRequest {
    fn default() -> Self {
        Self {
            part_id: 0,
            quantity: default_quantity(),
            tier: PriceTier::default(),
            currency: Currency::default(),
            include_analytics: false,
            include_tax_breakdown: false,
            include_discounts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ttl_table() {
        assert_eq!(PriceTier::Standard.cache_ttl(), Duration::from_secs(300));
        assert_eq!(PriceTier::Promotional.cache_ttl(), Duration::from_secs(120));
        assert_eq!(PriceTier::Contract.cache_ttl(), Duration::from_secs(7200));
    }

    #[test]
    fn test_request_defaults_from_json() {
        let req: PricingRequest = serde_json::from_str(r#"{"part_id": 42}"#).unwrap();
        assert_eq!(req.quantity, 1);
        assert_eq!(req.tier, PriceTier::Standard);
        assert_eq!(req.currency, Currency::Eur);
        assert!(!req.include_analytics);
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let res: Result<PricingRequest, _> =
            serde_json::from_str(r#"{"part_id": 42, "tier": "wholesale"}"#);
        assert!(res.is_err());
    }
}
