pub mod source;
pub mod validate;

pub use source::{PriceRecordSource, SourceError};
pub use validate::validate_request;

pub type PricingResult<T> = Result<T, PricingError>;

/// Failure taxonomy for the pricing pipeline. Conversion-rate gaps are
/// intentionally missing: the converter degrades to an identity rate
/// instead of failing a request.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no price available for part {0}")]
    NoPriceAvailable(u64),

    #[error("price source unavailable: {0}")]
    UpstreamUnavailable(#[from] SourceError),
}
