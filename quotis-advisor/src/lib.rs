pub mod analytics;
pub mod recommend;

pub use analytics::{assess_market, ANALYTICS_TTL};
pub use recommend::{RecommendationEngine, QUANTITY_BREAKPOINTS, RECOMMENDATION_TTL};
