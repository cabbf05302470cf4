use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::{ProductQuery, ProductRepository};

#[derive(Debug, Default)]
struct InMemoryState {
    products: BTreeMap<i64, Product>,
    last_id: i64,
}

/// Process-local product store, used when no database is configured.
///
/// Enforces the same unique-name constraint as the `products` table.
#[derive(Debug, Default)]
pub struct ProductRepositoryInMemory {
    state: RwLock<InMemoryState>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from existing records. New ids continue after the highest one.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<i64, Product> =
            products.into_iter().map(|p| (p.id, p)).collect();
        let last_id = products.keys().next_back().copied().unwrap_or(0);

        Self {
            state: RwLock::new(InMemoryState { products, last_id }),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .products
            .values()
            .filter(|p| query.matches(p))
            .cloned()
            .collect())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        if state.products.values().any(|p| p.name == product.name) {
            return Err(RepositoryError::Duplicated);
        }

        state.last_id += 1;
        let stored = Product::from_repository(
            state.last_id,
            product.name.clone(),
            product.in_stock_quantity,
            0,
        );
        state.products.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_quantities(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let stored = state
            .products
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;

        stored.in_stock_quantity = product.in_stock_quantity;
        stored.reserved_quantity = product.reserved_quantity;
        Ok(())
    }
}
