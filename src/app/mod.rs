//! 应用层：路由与共享状态

pub mod category;
pub mod product;

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use sqlx::postgres::PgPool;

use crate::core::{CoreError, CoreResult};
use crate::infrastructure::{DatabaseManager, HealthProbe};
use category::{CategoryService, CategoryStore, PgCategoryStore};
use product::{PgProductStore, ProductService, ProductStore};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub category_service: CategoryService,
    pub health: Arc<dyn HealthProbe>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryStore>,
        health: Arc<dyn HealthProbe>,
    ) -> Self {
        Self {
            product_service: ProductService::new(products, categories.clone()),
            category_service: CategoryService::new(categories),
            health,
        }
    }

    /// 基于 Postgres 连接池装配全部存储
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgProductStore::new(pool.clone())),
            Arc::new(PgCategoryStore::new(pool.clone())),
            Arc::new(DatabaseManager::from_pool(pool)),
        )
    }
}

/// 解析路径中的整数 id
pub(crate) fn parse_id(raw: &str, entity: &str) -> CoreResult<i32> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("invalid {} id: {}", entity, raw)))
}

async fn health_check(State(state): State<AppState>) -> CoreResult<Json<serde_json::Value>> {
    state.health.ping().await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// 创建路由
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/products",
            get(product::handler::list_products).post(product::handler::create_product),
        )
        .route(
            "/products/:id",
            get(product::handler::get_product)
                .put(product::handler::update_product)
                .delete(product::handler::delete_product),
        )
        .route("/categories", get(category::handler::list_categories))
        .route("/categories/:id", get(category::handler::get_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42", "product").unwrap(), 42);
        assert!(matches!(
            parse_id("abc", "product"),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            parse_id("1.5", "product"),
            Err(CoreError::Validation(_))
        ));
    }
}
