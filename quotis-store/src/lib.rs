pub mod app_config;
pub mod cache;
pub mod fingerprint;
pub mod memory_source;

pub use app_config::Config;
pub use cache::{CacheStats, TieredCache};
pub use fingerprint::{analytics_key, pricing_key, recommendation_key};
pub use memory_source::InMemoryPriceSource;
