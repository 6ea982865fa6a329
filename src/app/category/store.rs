//! 分类存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::model::Category;
use crate::core::{CoreError, CoreResult};

/// 分类存储接口
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn get_all(&self) -> CoreResult<Vec<Category>>;

    /// 不存在时返回 `Ok(None)`
    async fn get_by_id(&self, id: i32) -> CoreResult<Option<Category>>;
}

#[derive(Clone)]
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn get_all(&self) -> CoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name, created_at, updated_at FROM category")
            .fetch_all(&self.pool)
            .await
            .map_err(CoreError::storage("loading categories"))
    }

    async fn get_by_id(&self, id: i32) -> CoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, created_at, updated_at FROM category WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CoreError::storage("loading category"))
    }
}
