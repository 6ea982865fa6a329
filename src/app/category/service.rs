//! 分类业务服务

use std::sync::Arc;

use tracing::{error, info, warn};

use super::{model::Category, store::CategoryStore};
use crate::core::CoreResult;

#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    pub async fn get_by_id(&self, id: i32) -> CoreResult<Option<Category>> {
        info!(category_id = id, "Getting category by ID");

        match self.store.get_by_id(id).await {
            Ok(Some(category)) => {
                info!(category_id = id, "Category retrieved successfully");
                Ok(Some(category))
            }
            Ok(None) => {
                warn!(category_id = id, "Category not found");
                Ok(None)
            }
            Err(err) => {
                error!(category_id = id, error = %err, "Failed to get category");
                Err(err)
            }
        }
    }

    pub async fn get_all(&self) -> CoreResult<Vec<Category>> {
        info!("Getting all categories");

        let categories = self.store.get_all().await.map_err(|err| {
            error!(error = %err, "Failed to get all categories");
            err
        })?;

        info!(count = categories.len(), "All categories retrieved successfully");
        Ok(categories)
    }
}
