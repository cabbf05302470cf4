use serde::{Deserialize, Serialize};

use super::errors::ErrorReason;
use super::model::Product;

/// A request to move some quantity of one product.
///
/// `quantity` is kept signed as received; the validator rejects negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChangeRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// Outcome of a warehouse operation. `error_reason` is set only on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    pub error_reason: Option<ErrorReason>,
}

impl OperationResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error_reason: None,
        }
    }

    pub fn failed(reason: ErrorReason) -> Self {
        Self {
            success: false,
            error_reason: Some(reason),
        }
    }
}

/// Outcome of add-product: the created product is present only on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationResult {
    pub outcome: OperationResult,
    pub product: Option<Product>,
}

impl CreationResult {
    pub fn created(product: Product) -> Self {
        Self {
            outcome: OperationResult::succeeded(),
            product: Some(product),
        }
    }

    pub fn failed(reason: ErrorReason) -> Self {
        Self {
            outcome: OperationResult::failed(reason),
            product: None,
        }
    }
}
