use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the candidate list handed to the calculator.
pub const MAX_CANDIDATES: usize = 10;

/// Kind of a raw price record. Declaration order doubles as specificity:
/// later variants are more specific and win candidate ordering.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum PriceKind {
    #[default]
    Base,
    List,
    Campaign,
    Account,
}

/// A raw price record as returned by the price-record source.
///
/// Upstream feeds deliver some fields as free text, so the gross price and
/// the quantity unit stay optional here and are resolved during eligibility
/// checks and calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawPriceRecord {
    pub part_id: u64,
    pub price_kind: PriceKind,
    pub sale_unit_price_gross: Option<f64>,
    pub sale_unit_price_net: f64,
    pub deposit_unit_price_gross: f64,
    pub deposit_unit_price_net: f64,
    pub tax_rate_percent: f64,
    pub margin_absolute: f64,
    pub sale_quantity_unit: Option<String>,
    pub available: bool,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_to: Option<DateTime<Utc>>,
}

impl RawPriceRecord {
    /// A record is eligible when it is flagged available, carries a strictly
    /// positive gross price, and `now` falls inside its validity window.
    pub fn is_eligible_at(&self, now: DateTime<Utc>) -> bool {
        if !self.available {
            return false;
        }
        if !self.sale_unit_price_gross.map_or(false, |g| g > 0.0) {
            return false;
        }
        let from_ok = self.valid_from.map_or(true, |from| now >= from);
        let to_ok = self.valid_to.map_or(true, |to| now <= to);
        from_ok && to_ok
    }

    /// Sale quantity unit multiplier; absent, non-numeric, or non-positive
    /// values fall back to 1.
    pub fn quantity_unit(&self) -> f64 {
        self.sale_quantity_unit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|unit| *unit > 0.0)
            .unwrap_or(1.0)
    }
}

/// Filter to eligible records, order most-specific kind first, cap at
/// [`MAX_CANDIDATES`]. Ties keep the source order.
pub fn select_candidates(
    mut records: Vec<RawPriceRecord>,
    now: DateTime<Utc>,
) -> Vec<RawPriceRecord> {
    records.retain(|record| record.is_eligible_at(now));
    records.sort_by(|a, b| b.price_kind.cmp(&a.price_kind));
    records.truncate(MAX_CANDIDATES);
    records
}
