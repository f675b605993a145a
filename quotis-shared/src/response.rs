use crate::facts::{BulkDiscount, PriceAnalytics, PricingFacts, TaxBreakdown};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Rising,
    #[default]
    Stable,
    Falling,
}

/// A bulk tier the caller has not reached yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountOpportunity {
    pub min_qty: u32,
    pub rate: f64,
    pub additional_units: u32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeOption {
    pub label: String,
    pub description: String,
}

/// Advisory output of the recommendation engine. Non-authoritative; cached
/// separately from pricing facts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationBundle {
    pub optimal_quantity: u32,
    pub trend: PriceTrend,
    pub discount_opportunities: Vec<DiscountOpportunity>,
    pub alternatives: Vec<AlternativeOption>,
    pub stock_advice: String,
    pub confidence_score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseMeta {
    pub request_id: Uuid,
    pub cache_hit: bool,
    pub response_time_ms: u64,
}

/// Uniform response envelope: the caller always receives one of these,
/// never a raw fault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingResponse {
    pub success: bool,
    pub facts: Option<PricingFacts>,
    pub recommendations: Option<RecommendationBundle>,
    pub analytics: Option<PriceAnalytics>,
    pub tax_breakdown: Option<TaxBreakdown>,
    pub discounts: Option<Vec<BulkDiscount>>,
    pub error: Option<String>,
    pub meta: ResponseMeta,
}

impl PricingResponse {
    pub fn failure(error: String, meta: ResponseMeta) -> Self {
        Self {
            success: false,
            facts: None,
            recommendations: None,
            analytics: None,
            tax_breakdown: None,
            discounts: None,
            error: Some(error),
            meta,
        }
    }
}
