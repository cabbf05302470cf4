use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

/// Filters the store knows how to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductQuery {
    /// In stock and not fully reserved.
    InStock,
    /// Exact (case-sensitive) name match.
    NameEquals(String),
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductQuery::InStock => product.is_in_stock(),
            ProductQuery::NameEquals(name) => product.name == *name,
        }
    }
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Product>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError>;
    /// Persists a new product with zero reserved and returns it with its
    /// assigned id.
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Writes back both quantity fields of an existing product.
    async fn update_quantities(&self, product: &Product) -> Result<(), RepositoryError>;
}
