use quotis_shared::{Currency, PriceTier};

/// Cache key for computed pricing facts. Fixed field order and separator:
/// identical logical parameters always collide, differing ones never do.
pub fn pricing_key(part_id: u64, quantity: u32, tier: PriceTier, currency: Currency) -> String {
    format!(
        "{}:{}:{}:{}",
        part_id,
        quantity,
        tier.as_str(),
        currency.as_str()
    )
}

/// Recommendation bundles are keyed by part and quantity only.
pub fn recommendation_key(part_id: u64, quantity: u32) -> String {
    format!("{}:{}", part_id, quantity)
}

/// Market analytics are per part.
pub fn analytics_key(part_id: u64) -> String {
    part_id.to_string()
}
