use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::CreationResult;

pub struct AddProductParams {
    /// Requested name; missing or blank names are refused.
    pub name: Option<String>,
    pub in_stock_quantity: i32,
}

#[async_trait]
pub trait AddProductUseCase: Send + Sync {
    async fn execute(&self, params: AddProductParams) -> Result<CreationResult, ProductError>;
}
