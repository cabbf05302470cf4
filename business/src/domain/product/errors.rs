use serde::{Deserialize, Serialize};

use crate::domain::errors::RepositoryError;

/// Reasons a warehouse operation can be refused.
///
/// These are business outcomes: they are returned inside an
/// [`OperationResult`](super::value_objects::OperationResult), never raised.
/// Serialized by symbolic name (`"QuantityInvalid"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum ErrorReason {
    /// A negative quantity was requested.
    #[error("warehouse.quantity_invalid")]
    QuantityInvalid,
    /// The product does not exist, or a blank name was submitted.
    #[error("warehouse.invalid_request")]
    InvalidRequest,
    /// Ordering would reserve more than is in stock, or shipping would drive
    /// the stock below zero.
    #[error("warehouse.not_enough_quantity")]
    NotEnoughQuantity,
}

impl ErrorReason {
    /// Symbolic name, as exposed on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorReason::QuantityInvalid => "QuantityInvalid",
            ErrorReason::InvalidRequest => "InvalidRequest",
            ErrorReason::NotEnoughQuantity => "NotEnoughQuantity",
        }
    }
}

/// Faults that are not business outcomes.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
