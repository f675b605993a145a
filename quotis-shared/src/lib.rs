pub mod facts;
pub mod record;
pub mod request;
pub mod response;
pub mod status;

pub use facts::{
    BulkDiscount, CurrencyConversion, MarketPosition, PriceAnalytics, PricingFacts, QualityScore,
    QualityTier, TaxBreakdown,
};
pub use record::{select_candidates, PriceKind, RawPriceRecord, MAX_CANDIDATES};
pub use request::{Currency, PriceTier, PricingRequest};
pub use response::{
    AlternativeOption, DiscountOpportunity, PriceTrend, PricingResponse, RecommendationBundle,
    ResponseMeta,
};
pub use status::{HealthCheck, HealthState, HealthStatus, StatsSnapshot};
