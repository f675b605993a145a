pub mod service;
pub mod stats;

pub use service::PricingService;
pub use stats::ServiceStats;
