use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::{ProductQuery, ProductRepository};
use crate::domain::product::use_cases::get_in_stock::GetInStockProductsUseCase;

pub struct GetInStockProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInStockProductsUseCase for GetInStockProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching in-stock products");
        let products = self.repository.query(&ProductQuery::InStock).await?;
        self.logger
            .info(&format!("Found {} in-stock products", products.len()));
        Ok(products)
    }
}
