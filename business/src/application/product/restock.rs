use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::locks::ProductLocks;
use crate::application::product::quantity_change::apply_quantity_change;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::quantity::{self, QuantityOperation};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::restock::RestockProductUseCase;
use crate::domain::product::value_objects::{OperationResult, QuantityChangeRequest};

pub struct RestockProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub locks: Arc<ProductLocks>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestockProductUseCase for RestockProductUseCaseImpl {
    async fn execute(
        &self,
        request: QuantityChangeRequest,
    ) -> Result<OperationResult, ProductError> {
        apply_quantity_change(
            self.repository.as_ref(),
            &self.locks,
            self.logger.as_ref(),
            QuantityOperation::Restock,
            request,
            quantity::restock,
        )
        .await
    }
}
