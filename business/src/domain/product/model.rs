use serde::{Deserialize, Serialize};

use super::errors::ErrorReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub in_stock_quantity: i32,
    pub reserved_quantity: i32,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        in_stock_quantity: i32,
        reserved_quantity: i32,
    ) -> Self {
        Self {
            id,
            name,
            in_stock_quantity,
            reserved_quantity,
        }
    }

    /// In stock means there is something on the shelf that is not already
    /// promised to an order.
    pub fn is_in_stock(&self) -> bool {
        self.in_stock_quantity > 0 && self.in_stock_quantity > self.reserved_quantity
    }
}

/// A product that has passed creation checks but has no identity yet.
/// The store assigns the id and starts the reservation count at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub in_stock_quantity: i32,
}

impl NewProduct {
    /// Checks run in order: a blank name wins over a negative quantity.
    /// The returned name is trimmed.
    pub fn new(name: &str, in_stock_quantity: i32) -> Result<Self, ErrorReason> {
        if name.trim().is_empty() {
            return Err(ErrorReason::InvalidRequest);
        }

        if in_stock_quantity < 0 {
            return Err(ErrorReason::QuantityInvalid);
        }

        Ok(Self {
            name: name.trim().to_string(),
            in_stock_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_name_when_creating_new_product() {
        let product = NewProduct::new("  Widget \t", 4).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.in_stock_quantity, 4);
    }

    #[test]
    fn should_reject_empty_name() {
        assert_eq!(NewProduct::new("", 1), Err(ErrorReason::InvalidRequest));
    }

    #[test]
    fn should_reject_whitespace_only_name() {
        assert_eq!(NewProduct::new("   ", 1), Err(ErrorReason::InvalidRequest));
    }

    #[test]
    fn should_reject_negative_stock() {
        assert_eq!(
            NewProduct::new("Widget", -1),
            Err(ErrorReason::QuantityInvalid)
        );
    }

    #[test]
    fn should_report_blank_name_before_negative_stock() {
        assert_eq!(NewProduct::new(" ", -1), Err(ErrorReason::InvalidRequest));
    }

    #[test]
    fn should_accept_zero_stock() {
        assert!(NewProduct::new("Widget", 0).is_ok());
    }

    #[test]
    fn should_be_in_stock_only_when_unreserved_units_remain() {
        assert!(Product::from_repository(1, "A".into(), 5, 4).is_in_stock());
        assert!(!Product::from_repository(2, "B".into(), 5, 5).is_in_stock());
        assert!(!Product::from_repository(3, "C".into(), 0, -2).is_in_stock());
    }
}
