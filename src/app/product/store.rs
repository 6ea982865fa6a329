//! 产品存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::model::Product;
use crate::core::{CoreError, CoreResult};

const PRODUCT_COLUMNS: &str =
    "id, name, price, quantity, description, category_id, is_active, created_at, updated_at";

/// 产品存储接口
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 插入新产品，返回带有存储层分配的 id 与时间戳的产品
    async fn create(&self, product: &Product) -> CoreResult<Product>;

    /// 覆盖全部可变字段并刷新 `updated_at`
    async fn update(&self, product: &Product) -> CoreResult<Product>;

    async fn get_by_id(&self, id: i32) -> CoreResult<Product>;

    async fn delete(&self, id: i32) -> CoreResult<()>;

    /// 按 id 升序返回全部产品
    async fn get_all(&self) -> CoreResult<Vec<Product>>;
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: i32) -> CoreError {
    CoreError::NotFound(format!("product {}", id))
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, product: &Product) -> CoreResult<Product> {
        let query = format!(
            "INSERT INTO products (name, price, quantity, description, category_id, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {}",
            PRODUCT_COLUMNS
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.description)
            .bind(product.category_id)
            .bind(product.is_active)
            .fetch_one(&self.pool)
            .await
            .map_err(CoreError::storage("inserting product"))
    }

    async fn update(&self, product: &Product) -> CoreResult<Product> {
        let query = format!(
            "UPDATE products \
             SET name = $1, price = $2, quantity = $3, description = $4, category_id = $5, \
                 is_active = $6, updated_at = NOW() \
             WHERE id = $7 \
             RETURNING {}",
            PRODUCT_COLUMNS
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.quantity)
            .bind(&product.description)
            .bind(product.category_id)
            .bind(product.is_active)
            .bind(product.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CoreError::storage("updating product"))?
            .ok_or_else(|| not_found(product.id))
    }

    async fn get_by_id(&self, id: i32) -> CoreResult<Product> {
        let query = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CoreError::storage("loading product"))?
            .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i32) -> CoreResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(CoreError::storage("deleting product"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn get_all(&self) -> CoreResult<Vec<Product>> {
        let query = format!("SELECT {} FROM products ORDER BY id", PRODUCT_COLUMNS);

        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(CoreError::storage("loading products"))
    }
}
