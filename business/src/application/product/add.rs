use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ErrorReason, ProductError};
use crate::domain::product::model::NewProduct;
use crate::domain::product::naming::uniquify_name;
use crate::domain::product::policies::NameSuffix;
use crate::domain::product::repository::{ProductQuery, ProductRepository};
use crate::domain::product::use_cases::add::{AddProductParams, AddProductUseCase};
use crate::domain::product::value_objects::CreationResult;

pub struct AddProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    /// Held from the name check until the insert, so two concurrent adds
    /// cannot both claim the same free name.
    pub catalog_lock: Mutex<()>,
    pub name_suffix: NameSuffix,
    pub logger: Arc<dyn Logger>,
}

impl AddProductUseCaseImpl {
    async fn free_name(&self, name: &str) -> Result<String, ProductError> {
        let existing: Vec<String> = self
            .repository
            .list()
            .await?
            .into_iter()
            .map(|product| product.name)
            .collect();

        uniquify_name(name, &existing, self.name_suffix)
    }
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<CreationResult, ProductError> {
        let requested = params.name.unwrap_or_default();
        self.logger
            .info(&format!("Adding product: {:?}", requested));

        let mut product = match NewProduct::new(&requested, params.in_stock_quantity) {
            Ok(product) => product,
            Err(reason) => {
                self.logger
                    .rejection("add", &format!("name {:?}", requested), reason);
                return Ok(CreationResult::failed(reason));
            }
        };

        let _guard = self.catalog_lock.lock().await;

        let collisions = self
            .repository
            .query(&ProductQuery::NameEquals(product.name.clone()))
            .await?;

        if !collisions.is_empty() {
            match self.free_name(&product.name).await {
                Ok(unique) => {
                    self.logger.info(&format!(
                        "Name {:?} is taken, using {:?}",
                        product.name, unique
                    ));
                    product.name = unique;
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Could not find a free name for {:?}: {}",
                        product.name, err
                    ));
                    return Ok(CreationResult::failed(ErrorReason::InvalidRequest));
                }
            }
        }

        let created = self.repository.insert(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", created.id));
        Ok(CreationResult::created(created))
    }
}
