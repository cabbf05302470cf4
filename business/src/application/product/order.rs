use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::locks::ProductLocks;
use crate::application::product::quantity_change::apply_quantity_change;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::quantity::{self, QuantityOperation};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::order::OrderProductUseCase;
use crate::domain::product::value_objects::{OperationResult, QuantityChangeRequest};

pub struct OrderProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub locks: Arc<ProductLocks>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl OrderProductUseCase for OrderProductUseCaseImpl {
    async fn execute(
        &self,
        request: QuantityChangeRequest,
    ) -> Result<OperationResult, ProductError> {
        apply_quantity_change(
            self.repository.as_ref(),
            &self.locks,
            self.logger.as_ref(),
            QuantityOperation::Order,
            request,
            quantity::order,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::ErrorReason;
    use crate::domain::product::model::{NewProduct, Product};
    use crate::domain::product::repository::ProductQuery;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
            async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError>;
            async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
            async fn update_quantities(&self, product: &Product) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(repo: MockProductRepo) -> OrderProductUseCaseImpl {
        OrderProductUseCaseImpl {
            repository: Arc::new(repo),
            locks: Arc::new(ProductLocks::new()),
            logger: mock_logger(),
        }
    }

    fn widget(in_stock: i32, reserved: i32) -> Product {
        Product::from_repository(1, "Widget".to_string(), in_stock, reserved)
    }

    #[tokio::test]
    async fn should_reserve_quantity_when_stock_allows() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .withf(|id| *id == 1)
            .returning(|_| Ok(Some(widget(10, 5))));
        mock_repo
            .expect_update_quantities()
            .withf(|p| p.id == 1 && p.in_stock_quantity == 10 && p.reserved_quantity == 10)
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(mock_repo)
            .execute(QuantityChangeRequest {
                product_id: 1,
                quantity: 5,
            })
            .await
            .unwrap();

        assert_eq!(result, OperationResult::succeeded());
    }

    #[tokio::test]
    async fn should_reject_order_beyond_stock_without_persisting() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Ok(Some(widget(10, 5))));
        mock_repo.expect_update_quantities().never();

        let result = use_case(mock_repo)
            .execute(QuantityChangeRequest {
                product_id: 1,
                quantity: 6,
            })
            .await
            .unwrap();

        assert_eq!(
            result,
            OperationResult::failed(ErrorReason::NotEnoughQuantity)
        );
    }

    #[tokio::test]
    async fn should_reject_negative_quantity_even_for_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));
        mock_repo.expect_update_quantities().never();

        let result = use_case(mock_repo)
            .execute(QuantityChangeRequest {
                product_id: 42,
                quantity: -1,
            })
            .await
            .unwrap();

        assert_eq!(result, OperationResult::failed(ErrorReason::QuantityInvalid));
    }

    #[tokio::test]
    async fn should_reject_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));
        mock_repo.expect_update_quantities().never();

        let result = use_case(mock_repo)
            .execute(QuantityChangeRequest {
                product_id: 42,
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(result, OperationResult::failed(ErrorReason::InvalidRequest));
    }

    #[tokio::test]
    async fn should_log_rejection_reason_at_warn() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("order") && message.contains("InvalidRequest"))
            .times(1)
            .returning(|_| ());

        let use_case = OrderProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            locks: Arc::new(ProductLocks::new()),
            logger: Arc::new(logger),
        };

        let _ = use_case
            .execute(QuantityChangeRequest {
                product_id: 42,
                quantity: 1,
            })
            .await;
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(mock_repo)
            .execute(QuantityChangeRequest {
                product_id: 1,
                quantity: 1,
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
