use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::locks::ProductLocks;
use crate::application::product::quantity_change::apply_quantity_change;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::policies::ReservedOnShip;
use crate::domain::product::quantity::{self, QuantityOperation};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::ship::ShipProductUseCase;
use crate::domain::product::value_objects::{OperationResult, QuantityChangeRequest};

pub struct ShipProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub locks: Arc<ProductLocks>,
    pub reserved_on_ship: ReservedOnShip,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShipProductUseCase for ShipProductUseCaseImpl {
    async fn execute(
        &self,
        request: QuantityChangeRequest,
    ) -> Result<OperationResult, ProductError> {
        let policy = self.reserved_on_ship;
        apply_quantity_change(
            self.repository.as_ref(),
            &self.locks,
            self.logger.as_ref(),
            QuantityOperation::Ship,
            request,
            move |product, amount| quantity::ship(product, amount, policy),
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

    fn use_case(repo: MockProductRepo, policy: ReservedOnShip) -> ShipProductUseCaseImpl {
        ShipProductUseCaseImpl {
            repository: Arc::new(repo),
            locks: Arc::new(ProductLocks::new()),
            reserved_on_ship: policy,
            logger: mock_logger(),
        }
    }

    fn request(quantity: i32) -> QuantityChangeRequest {
        QuantityChangeRequest {
            product_id: 3,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_ship_reserved_stock() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| {
            Ok(Some(Product::from_repository(3, "Bolt".to_string(), 10, 10)))
        });
        mock_repo
            .expect_update_quantities()
            .withf(|p| p.in_stock_quantity == 0 && p.reserved_quantity == 0)
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(mock_repo, ReservedOnShip::Subtract)
            .execute(request(10))
            .await
            .unwrap();

        assert!(result.success);
    }

    #[tokio::test]
    async fn should_reject_shipping_more_than_in_stock() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| {
            Ok(Some(Product::from_repository(3, "Bolt".to_string(), 10, 10)))
        });
        mock_repo.expect_update_quantities().never();

        let result = use_case(mock_repo, ReservedOnShip::Subtract)
            .execute(request(11))
            .await
            .unwrap();

        assert_eq!(
            result,
            OperationResult::failed(ErrorReason::NotEnoughQuantity)
        );
    }

    #[tokio::test]
    async fn should_persist_negative_reserved_under_subtract_policy() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| {
            Ok(Some(Product::from_repository(3, "Bolt".to_string(), 8, 1)))
        });
        mock_repo
            .expect_update_quantities()
            .withf(|p| p.in_stock_quantity == 4 && p.reserved_quantity == -3)
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(mock_repo, ReservedOnShip::Subtract)
            .execute(request(4))
            .await
            .unwrap();

        assert!(result.success);
    }

    #[tokio::test]
    async fn should_persist_zero_reserved_under_floor_policy() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| {
            Ok(Some(Product::from_repository(3, "Bolt".to_string(), 8, 1)))
        });
        mock_repo
            .expect_update_quantities()
            .withf(|p| p.in_stock_quantity == 4 && p.reserved_quantity == 0)
            .times(1)
            .returning(|_| Ok(()));

        let result = use_case(mock_repo, ReservedOnShip::FloorAtZero)
            .execute(request(4))
            .await
            .unwrap();

        assert!(result.success);
    }

    #[tokio::test]
    async fn should_reject_negative_quantity() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get().returning(|_| Ok(None));
        mock_repo.expect_update_quantities().never();

        let result = use_case(mock_repo, ReservedOnShip::Subtract)
            .execute(request(-5))
            .await
            .unwrap();

        assert_eq!(result, OperationResult::failed(ErrorReason::QuantityInvalid));
    }
}
