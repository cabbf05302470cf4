use super::errors::ErrorReason;
use super::model::Product;
use super::value_objects::QuantityChangeRequest;

/// Gatekeeper for order, ship and restock.
///
/// Rules are checked in order and the first failure wins, so a negative
/// quantity against a missing product reports `QuantityInvalid`.
/// On success the looked-up product is handed back, known to exist.
pub fn validate_request<'a>(
    request: &QuantityChangeRequest,
    product: Option<&'a Product>,
) -> Result<&'a Product, ErrorReason> {
    if request.quantity < 0 {
        return Err(ErrorReason::QuantityInvalid);
    }

    product.ok_or(ErrorReason::InvalidRequest)
}
