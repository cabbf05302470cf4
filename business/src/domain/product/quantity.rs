use super::errors::ErrorReason;
use super::model::Product;
use super::policies::ReservedOnShip;

/// The quantity-changing operations the warehouse exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOperation {
    Order,
    Ship,
    Restock,
}

impl std::fmt::Display for QuantityOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityOperation::Order => write!(f, "order"),
            QuantityOperation::Ship => write!(f, "ship"),
            QuantityOperation::Restock => write!(f, "restock"),
        }
    }
}

// All transitions expect a validated request: the product exists and
// `quantity >= 0`. Comparisons are done in i64 so they cannot overflow.

/// Reserves `quantity` more units. In-stock is untouched.
pub fn order(product: &Product, quantity: i32) -> Result<Product, ErrorReason> {
    let reserved = i64::from(product.reserved_quantity) + i64::from(quantity);
    if reserved > i64::from(product.in_stock_quantity) {
        return Err(ErrorReason::NotEnoughQuantity);
    }

    Ok(Product {
        reserved_quantity: product.reserved_quantity + quantity,
        ..product.clone()
    })
}

/// Takes `quantity` units out of the warehouse, releasing the same amount of
/// reservation according to `policy`.
pub fn ship(
    product: &Product,
    quantity: i32,
    policy: ReservedOnShip,
) -> Result<Product, ErrorReason> {
    if i64::from(product.in_stock_quantity) - i64::from(quantity) < 0 {
        return Err(ErrorReason::NotEnoughQuantity);
    }

    let reserved = product.reserved_quantity.saturating_sub(quantity);
    let reserved_quantity = match policy {
        ReservedOnShip::Subtract => reserved,
        ReservedOnShip::FloorAtZero => reserved.max(0),
    };

    Ok(Product {
        in_stock_quantity: product.in_stock_quantity - quantity,
        reserved_quantity,
        ..product.clone()
    })
}

/// Adds `quantity` units to the shelf. The only limit is what the quantity
/// type can hold; a sum past `i32::MAX` is refused as `QuantityInvalid`.
pub fn restock(product: &Product, quantity: i32) -> Result<Product, ErrorReason> {
    let in_stock_quantity = product
        .in_stock_quantity
        .checked_add(quantity)
        .ok_or(ErrorReason::QuantityInvalid)?;

    Ok(Product {
        in_stock_quantity,
        ..product.clone()
    })
}
