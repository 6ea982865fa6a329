//! 产品数据模型

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::category::Category;
use crate::core::{CoreError, CoreResult};

/// 产品
///
/// 同时作为请求体的形状：缺省字段取零值，请求体中的 `id` 与时间戳被忽略，由存储层分配。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(skip_deserializing)]
    pub id: i32,
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,
    pub price: Decimal,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i32,
    #[validate(length(max = 4096, message = "description must be at most 4096 characters"))]
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: bool,
    #[serde(skip_deserializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_deserializing)]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// 校验请求体字段
    pub fn check(&self) -> CoreResult<()> {
        self.validate()?;
        if self.price < Decimal::ZERO {
            return Err(CoreError::Validation("price must not be negative".to_string()));
        }
        Ok(())
    }
}

/// 列表响应：产品并带上分类名称
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 分类名称，无分类时为空串
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductResponse {
    pub fn new(product: Product, category: Option<&Category>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            category: category.map(|c| c.name.clone()).unwrap_or_default(),
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
