use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub in_stock_quantity: i32,
    pub reserved_quantity: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.in_stock_quantity,
            self.reserved_quantity,
        )
    }
}
