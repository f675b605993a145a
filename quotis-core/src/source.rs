use async_trait::async_trait;
use quotis_shared::RawPriceRecord;

/// Failure of the price-record storage query itself, as opposed to a part
/// that simply has no eligible records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("storage query timed out")]
    Timeout,
}

/// Read-only view onto the price-record storage.
///
/// Implementations return eligible records only, ordered most-specific
/// price kind first and capped at [`quotis_shared::MAX_CANDIDATES`]; the
/// first record is the primary one.
#[async_trait]
pub trait PriceRecordSource: Send + Sync {
    async fn find_eligible_prices(&self, part_id: u64) -> Result<Vec<RawPriceRecord>, SourceError>;
}
