use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::errors::ErrorReason;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{
    CreationResult, OperationResult, QuantityChangeRequest,
};

/// Why an operation was refused, by symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum ErrorReasonDto {
    #[oai(rename = "QuantityInvalid")]
    QuantityInvalid,
    #[oai(rename = "InvalidRequest")]
    InvalidRequest,
    #[oai(rename = "NotEnoughQuantity")]
    NotEnoughQuantity,
}

impl From<ErrorReason> for ErrorReasonDto {
    fn from(reason: ErrorReason) -> Self {
        match reason {
            ErrorReason::QuantityInvalid => ErrorReasonDto::QuantityInvalid,
            ErrorReason::InvalidRequest => ErrorReasonDto::InvalidRequest,
            ErrorReason::NotEnoughQuantity => ErrorReasonDto::NotEnoughQuantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    /// Product to change
    pub id: i64,
    /// Amount to order, ship or restock (must not be negative)
    pub quantity: i32,
}

impl From<UpdateQuantityRequest> for QuantityChangeRequest {
    fn from(dto: UpdateQuantityRequest) -> Self {
        Self {
            product_id: dto.id,
            quantity: dto.quantity,
        }
    }
}

/// Product submitted for creation. Any `id` or `reservedQuantity` sent by the
/// client is ignored: the store assigns the id and reservations start at zero.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddProductRequest {
    /// Requested name; made unique if already taken
    pub name: Option<String>,
    /// Initial stock (must not be negative)
    #[oai(default)]
    pub in_stock_quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    /// Quantity currently in the warehouse
    pub in_stock_quantity: i32,
    /// Quantity reserved for existing orders
    pub reserved_quantity: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            in_stock_quantity: product.in_stock_quantity,
            reserved_quantity: product.reserved_quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub success: bool,
    /// Set only when `success` is false
    pub error_reason: Option<ErrorReasonDto>,
}

impl From<OperationResult> for UpdateResponse {
    fn from(result: OperationResult) -> Self {
        Self {
            success: result.success,
            error_reason: result.error_reason.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateResponse {
    pub success: bool,
    /// Set only when `success` is false
    pub error_reason: Option<ErrorReasonDto>,
    /// The stored product, present only on success
    pub model: Option<ProductResponse>,
}

impl From<CreationResult> for CreateResponse {
    fn from(result: CreationResult) -> Self {
        Self {
            success: result.outcome.success,
            error_reason: result.outcome.error_reason.map(Into::into),
            model: result.product.map(Into::into),
        }
    }
}
