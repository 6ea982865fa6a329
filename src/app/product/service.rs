//! 产品业务服务

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{model::Product, store::ProductStore};
use crate::app::category::CategoryStore;
use crate::core::{CoreError, CoreResult};

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductStore>,
    categories: Arc<dyn CategoryStore>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// 创建产品，分类引用必须指向已存在的分类
    pub async fn create(&self, product: &Product) -> CoreResult<Product> {
        let category_id = product.category_id;
        let Some(id) = category_id else {
            warn!("Rejecting product without category reference");
            return Err(CoreError::InvalidCategory(None));
        };

        match self.categories.get_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                warn!(category_id = id, "Rejecting product with unknown category");
                return Err(CoreError::InvalidCategory(category_id));
            }
            Err(err) => {
                warn!(category_id = id, error = %err, "Category lookup failed during create");
                return Err(CoreError::InvalidCategory(category_id));
            }
        }

        let created = self.products.create(product).await?;
        info!(product_id = created.id, "Product created");
        Ok(created)
    }

    /// 部分更新：读取现有产品，按字段合并后整体写回
    pub async fn update(&self, product: &Product) -> CoreResult<Product> {
        let mut existing = self.products.get_by_id(product.id).await?;
        merge_update(&mut existing, product);

        let updated = self.products.update(&existing).await?;
        info!(product_id = updated.id, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, product: &Product) -> CoreResult<()> {
        self.products.delete(product.id).await?;
        info!(product_id = product.id, "Product deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: i32) -> CoreResult<Product> {
        self.products.get_by_id(id).await
    }

    pub async fn get_all(&self) -> CoreResult<Vec<Product>> {
        self.products.get_all().await
    }
}

/// 合并规则：
/// - name 为空串、price 为零视为未修改
/// - description 只要出现（含空串）就覆盖
/// - is_active 总是覆盖
/// - quantity 与 category_id 不参与合并
fn merge_update(existing: &mut Product, incoming: &Product) {
    if !incoming.name.is_empty() {
        existing.name = incoming.name.clone();
    }
    if incoming.price != Decimal::ZERO {
        existing.price = incoming.price;
    }
    if let Some(description) = &incoming.description {
        existing.description = Some(description.clone());
    }
    existing.is_active = incoming.is_active;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Product {
        Product {
            id: 1,
            name: "Pen".into(),
            price: Decimal::new(15, 1),
            quantity: 10,
            description: Some("blue ink".into()),
            category_id: Some(1),
            is_active: true,
            ..Product::default()
        }
    }

    #[test]
    fn empty_name_and_zero_price_keep_stored_values() {
        let mut existing = stored();
        merge_update(
            &mut existing,
            &Product {
                id: 1,
                is_active: false,
                ..Product::default()
            },
        );

        assert_eq!(existing.name, "Pen");
        assert_eq!(existing.price, Decimal::new(15, 1));
        assert_eq!(existing.description.as_deref(), Some("blue ink"));
        assert!(!existing.is_active);
    }

    #[test]
    fn explicit_values_overwrite() {
        let mut existing = stored();
        merge_update(
            &mut existing,
            &Product {
                id: 1,
                name: "Marker".into(),
                price: Decimal::new(299, 2),
                description: Some(String::new()),
                is_active: true,
                ..Product::default()
            },
        );

        assert_eq!(existing.name, "Marker");
        assert_eq!(existing.price, Decimal::new(299, 2));
        assert_eq!(existing.description.as_deref(), Some(""));
        assert!(existing.is_active);
    }

    #[test]
    fn quantity_and_category_are_not_merged() {
        let mut existing = stored();
        merge_update(
            &mut existing,
            &Product {
                id: 1,
                quantity: 99,
                category_id: Some(42),
                is_active: true,
                ..Product::default()
            },
        );

        assert_eq!(existing.quantity, 10);
        assert_eq!(existing.category_id, Some(1));
    }
}
