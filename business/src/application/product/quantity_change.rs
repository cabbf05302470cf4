use crate::application::product::locks::ProductLocks;
use crate::domain::logger::Logger;
use crate::domain::product::errors::{ErrorReason, ProductError};
use crate::domain::product::model::Product;
use crate::domain::product::quantity::QuantityOperation;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::validation::validate_request;
use crate::domain::product::value_objects::{OperationResult, QuantityChangeRequest};

/// Fetch, validate, transition and persist one product under its lock.
///
/// Rejections come back as a failed [`OperationResult`] and leave the store
/// untouched. Only repository faults are returned as errors.
pub async fn apply_quantity_change<F>(
    repository: &dyn ProductRepository,
    locks: &ProductLocks,
    logger: &dyn Logger,
    operation: QuantityOperation,
    request: QuantityChangeRequest,
    transition: F,
) -> Result<OperationResult, ProductError>
where
    F: FnOnce(&Product, i32) -> Result<Product, ErrorReason> + Send,
{
    logger.info(&format!(
        "Processing {} of {} for product {}",
        operation, request.quantity, request.product_id
    ));

    let _guard = locks.acquire(request.product_id).await;
    let product = repository.get(request.product_id).await?;

    let updated = match validate_request(&request, product.as_ref())
        .and_then(|current| transition(current, request.quantity))
    {
        Ok(updated) => updated,
        Err(reason) => {
            logger.rejection(
                &operation.to_string(),
                &format!("product {}", request.product_id),
                reason,
            );
            return Ok(OperationResult::failed(reason));
        }
    };

    repository.update_quantities(&updated).await?;

    logger.info(&format!(
        "Product {} after {}: in stock {}, reserved {}",
        updated.id, operation, updated.in_stock_quantity, updated.reserved_quantity
    ));
    Ok(OperationResult::succeeded())
}
