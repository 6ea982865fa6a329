//! 分类数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 分类（只读，预置数据）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
