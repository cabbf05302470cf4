use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::{OperationResult, QuantityChangeRequest};

#[async_trait]
pub trait RestockProductUseCase: Send + Sync {
    async fn execute(&self, request: QuantityChangeRequest)
    -> Result<OperationResult, ProductError>;
}
