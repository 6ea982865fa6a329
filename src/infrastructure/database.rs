//! 数据库基础设施

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::core::{CoreError, CoreResult};

/// 健康检查探针
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn ping(&self) -> CoreResult<()>;
}

#[derive(Clone)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    /// 创建 category 与 products 表（幂等）
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        info!("Ensuring database schema");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS category (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                price NUMERIC(12, 2) NOT NULL DEFAULT 0,
                quantity INTEGER NOT NULL DEFAULT 0,
                description TEXT,
                category_id INTEGER REFERENCES category(id),
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// category 表为空时写入给定分类，返回写入条数
    pub async fn seed_categories(&self, names: &[String]) -> Result<usize, sqlx::Error> {
        if names.is_empty() {
            return Ok(0);
        }

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM category")
            .fetch_one(&self.pool)
            .await?;

        if count.0 > 0 {
            info!(existing = count.0, "Category table already populated, skipping seed");
            return Ok(0);
        }

        for name in names {
            sqlx::query("INSERT INTO category (name) VALUES ($1)")
                .bind(name)
                .execute(&self.pool)
                .await?;
        }

        info!(seeded = names.len(), "Seeded categories");
        Ok(names.len())
    }
}

#[async_trait]
impl HealthProbe for DatabaseManager {
    async fn ping(&self) -> CoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(CoreError::storage("pinging database"))?;
        Ok(())
    }
}
