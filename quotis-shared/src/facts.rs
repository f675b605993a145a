use crate::request::Currency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One bulk discount tier as evaluated for a request. Inactive tiers are
/// kept with zero savings so the list is always complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkDiscount {
    pub min_qty: u32,
    pub rate: f64,
    pub savings: f64,
}

/// Result of converting the gross total into the requested currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrencyConversion {
    pub base: Currency,
    pub target: Currency,
    pub rate_used: f64,
    pub amounts: BTreeMap<Currency, f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Excellent,
    Good,
    Average,
}

impl QualityTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => QualityTier::Excellent,
            60..=79 => QualityTier::Good,
            _ => QualityTier::Average,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Excellent => "excellent",
            QualityTier::Good => "good",
            QualityTier::Average => "average",
        }
    }
}

/// Relative ranking of the chosen price among all eligible candidates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityScore {
    pub score: u8,
    pub tier: QualityTier,
    pub rank: usize,
    pub candidate_count: usize,
}

/// The full set of derived pricing facts for one request. Immutable once
/// computed; cache replacement swaps the whole value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingFacts {
    pub unit_gross: f64,
    pub unit_net: f64,
    pub gross_total: f64,
    pub net_total: f64,
    pub deposit_gross_total: f64,
    pub deposit_net_total: f64,
    pub vat_amount: f64,
    pub vat_rate: f64,
    pub margin_unit: f64,
    pub margin_total: f64,
    pub margin_percent: i64,
    pub bulk_discounts: Vec<BulkDiscount>,
    pub currency: CurrencyConversion,
    pub quality: QualityScore,
}

/// Tax view of already-computed facts, returned on request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxBreakdown {
    pub net_total: f64,
    pub vat_rate: f64,
    pub vat_amount: f64,
    pub gross_total: f64,
}

impl TaxBreakdown {
    pub fn from_facts(facts: &PricingFacts) -> Self {
        Self {
            net_total: facts.net_total,
            vat_rate: facts.vat_rate,
            vat_amount: facts.vat_amount,
            gross_total: facts.gross_total,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    BelowMarket,
    AtMarket,
    AboveMarket,
}

/// Market comparison for one part, derived from the candidate set until a
/// real market feed is wired in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceAnalytics {
    pub market_average: f64,
    pub delta_percent: f64,
    pub position: MarketPosition,
    pub sample_size: usize,
}
