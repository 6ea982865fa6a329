//! 测试用的内存存储
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;

use product_service::app::category::{Category, CategoryStore};
use product_service::app::product::{Product, ProductStore};
use product_service::config::ServerConfig;
use product_service::infrastructure::HealthProbe;
use product_service::{build_app, AppState, CoreError, CoreResult};

#[derive(Default)]
pub struct MemoryProductStore {
    rows: Mutex<BTreeMap<i32, Product>>,
    next_id: AtomicUsize,
    creates: AtomicUsize,
}

impl MemoryProductStore {
    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn row(&self, id: i32) -> Option<Product> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, product: &Product) -> CoreResult<Product> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let now = Utc::now();
        let created = Product {
            id,
            created_at: now,
            updated_at: now,
            ..product.clone()
        };
        self.rows.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> CoreResult<Product> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .get_mut(&product.id)
            .ok_or_else(|| CoreError::NotFound(format!("product {}", product.id)))?;
        *row = Product {
            created_at: row.created_at,
            updated_at: Utc::now(),
            ..product.clone()
        };
        Ok(row.clone())
    }

    async fn get_by_id(&self, id: i32) -> CoreResult<Product> {
        self.row(id)
            .ok_or_else(|| CoreError::NotFound(format!("product {}", id)))
    }

    async fn delete(&self, id: i32) -> CoreResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound(format!("product {}", id)))
    }

    async fn get_all(&self) -> CoreResult<Vec<Product>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default)]
pub struct MemoryCategoryStore {
    rows: Vec<Category>,
}

impl MemoryCategoryStore {
    pub fn with(categories: &[(i32, &str)]) -> Self {
        let now = Utc::now();
        Self {
            rows: categories
                .iter()
                .map(|(id, name)| Category {
                    id: *id,
                    name: name.to_string(),
                    created_at: now,
                    updated_at: now,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn get_all(&self) -> CoreResult<Vec<Category>> {
        Ok(self.rows.clone())
    }

    async fn get_by_id(&self, id: i32) -> CoreResult<Option<Category>> {
        Ok(self.rows.iter().find(|c| c.id == id).cloned())
    }
}

/// 每次查询都失败的分类存储
pub struct BrokenCategoryStore;

#[async_trait]
impl CategoryStore for BrokenCategoryStore {
    async fn get_all(&self) -> CoreResult<Vec<Category>> {
        Err(CoreError::storage("loading categories")(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: i32) -> CoreResult<Option<Category>> {
        Err(CoreError::storage("loading category")(sqlx::Error::PoolTimedOut))
    }
}

/// 每次读写都失败的产品存储
pub struct BrokenProductStore;

#[async_trait]
impl ProductStore for BrokenProductStore {
    async fn create(&self, _product: &Product) -> CoreResult<Product> {
        Err(CoreError::storage("creating product")(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _product: &Product) -> CoreResult<Product> {
        Err(CoreError::storage("updating product")(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: i32) -> CoreResult<Product> {
        Err(CoreError::storage("loading product")(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> CoreResult<()> {
        Err(CoreError::storage("deleting product")(sqlx::Error::PoolTimedOut))
    }

    async fn get_all(&self) -> CoreResult<Vec<Product>> {
        Err(CoreError::storage("loading products")(sqlx::Error::PoolTimedOut))
    }
}

pub struct Healthy;

#[async_trait]
impl HealthProbe for Healthy {
    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }
}

pub fn state(products: Arc<dyn ProductStore>, categories: Arc<dyn CategoryStore>) -> AppState {
    AppState::new(products, categories, Arc::new(Healthy))
}

pub fn server(state: AppState) -> TestServer {
    TestServer::new(build_app(state, &ServerConfig::default())).unwrap()
}

pub fn pen(category_id: Option<i32>) -> Product {
    Product {
        name: "Pen".to_string(),
        price: rust_decimal::Decimal::new(15, 1),
        quantity: 10,
        category_id,
        is_active: true,
        ..Product::default()
    }
}
