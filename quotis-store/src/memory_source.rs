use async_trait::async_trait;
use chrono::Utc;
use quotis_core::{PriceRecordSource, SourceError};
use quotis_shared::{select_candidates, RawPriceRecord};
use std::collections::HashMap;
use std::sync::RwLock;

/// Price-record source backed by a process-local table. Stands in for the
/// real storage adapter in the demo binary and in tests.
#[derive(Debug, Default)]
pub struct InMemoryPriceSource {
    records: RwLock<HashMap<u64, Vec<RawPriceRecord>>>,
}

impl InMemoryPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawPriceRecord>,
    {
        let source = Self::new();
        for record in records {
            source.insert(record);
        }
        source
    }

    pub fn insert(&self, record: RawPriceRecord) {
        let mut table = self.records.write().expect("price table lock poisoned");
        table.entry(record.part_id).or_default().push(record);
    }
}

#[async_trait]
impl PriceRecordSource for InMemoryPriceSource {
    async fn find_eligible_prices(&self, part_id: u64) -> Result<Vec<RawPriceRecord>, SourceError> {
        let table = self
            .records
            .read()
            .map_err(|_| SourceError::Backend("price table lock poisoned".to_string()))?;
        let records = table.get(&part_id).cloned().unwrap_or_default();
        Ok(select_candidates(records, Utc::now()))
    }
}
