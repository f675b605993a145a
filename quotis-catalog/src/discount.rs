use crate::round2;
use quotis_shared::BulkDiscount;

/// Fixed bulk tiers as (minimum quantity, discount rate), ascending.
pub const BULK_TIERS: [(u32, f64); 3] = [(10, 0.05), (50, 0.10), (100, 0.15)];

/// Evaluate every bulk tier against the requested quantity. Tiers the
/// quantity does not reach are returned with zero savings rather than
/// filtered out.
pub fn evaluate_bulk_discounts(gross_total: f64, quantity: u32) -> Vec<BulkDiscount> {
    BULK_TIERS
        .iter()
        .map(|&(min_qty, rate)| {
            let savings = if quantity >= min_qty {
                round2(gross_total * rate)
            } else {
                0.0
            };
            BulkDiscount {
                min_qty,
                rate,
                savings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tiers_always_present_and_ordered() {
        let discounts = evaluate_bulk_discounts(100.0, 1);
        assert_eq!(discounts.len(), 3);
        assert!(discounts.windows(2).all(|w| w[0].min_qty < w[1].min_qty));
    }

    #[test]
    fn test_quantity_below_first_tier() {
        let discounts = evaluate_bulk_discounts(500.0, 9);
        assert!(discounts.iter().all(|d| d.savings == 0.0));
    }

    #[test]
    fn test_first_tier_boundary() {
        let discounts = evaluate_bulk_discounts(500.0, 10);
        assert_eq!(discounts[0].savings, 25.0);
        assert_eq!(discounts[1].savings, 0.0);
        assert_eq!(discounts[2].savings, 0.0);
    }

    #[test]
    fn test_all_tiers_active() {
        let discounts = evaluate_bulk_discounts(1000.0, 100);
        assert_eq!(discounts[0].savings, 50.0);
        assert_eq!(discounts[1].savings, 100.0);
        assert_eq!(discounts[2].savings, 150.0);
    }
}
