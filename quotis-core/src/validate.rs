use crate::PricingError;
use quotis_shared::PricingRequest;

/// Boundary validation, applied before any lookup. Enum fields are already
/// closed at the type level; only the numeric invariants remain.
pub fn validate_request(request: &PricingRequest) -> Result<(), PricingError> {
    if request.part_id == 0 {
        return Err(PricingError::InvalidRequest(
            "part_id must be positive".to_string(),
        ));
    }
    if request.quantity == 0 {
        return Err(PricingError::InvalidRequest(
            "quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
