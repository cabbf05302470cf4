use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::{ProductQuery, ProductRepository};

use super::entity::ProductEntity;

const SELECT_PRODUCTS: &str =
    "SELECT id, name, in_stock_quantity, reserved_quantity FROM products";

fn database_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "product query failed");
    RepositoryError::DatabaseError
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get(&self, id: i64) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn query(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError> {
        let entities = match query {
            ProductQuery::InStock => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "{SELECT_PRODUCTS} WHERE in_stock_quantity > 0 AND in_stock_quantity > reserved_quantity ORDER BY id"
                ))
                .fetch_all(&self.pool)
                .await
            }
            ProductQuery::NameEquals(name) => {
                sqlx::query_as::<_, ProductEntity>(&format!(
                    "{SELECT_PRODUCTS} WHERE name = $1 ORDER BY id"
                ))
                .bind(name)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, in_stock_quantity, reserved_quantity)
            VALUES ($1, $2, 0)
            RETURNING id, name, in_stock_quantity, reserved_quantity"#,
        )
        .bind(&product.name)
        .bind(product.in_stock_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => database_error(err),
        })?;

        Ok(entity.into_domain())
    }

    async fn update_quantities(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET in_stock_quantity = $2, reserved_quantity = $3 WHERE id = $1",
        )
        .bind(product.id)
        .bind(product.in_stock_quantity)
        .bind(product.reserved_quantity)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
