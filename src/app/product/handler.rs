//! 产品处理器

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, instrument, warn};

use super::model::{Product, ProductResponse};
use crate::app::{parse_id, AppState};
use crate::core::{CoreError, CoreResult};

/// 解析请求体；`allow_empty` 时空请求体视为全零值产品
fn decode_product(body: &Bytes, allow_empty: bool) -> CoreResult<Product> {
    if allow_empty && body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Product::default());
    }

    let product: Product = serde_json::from_slice(body).map_err(|err| {
        error!(error = %err, "Error decoding request payload");
        CoreError::from(err)
    })?;
    product.check()?;
    Ok(product)
}

/// 关联分类名称；查询失败时整个请求失败
async fn with_category(state: &AppState, product: Product) -> CoreResult<ProductResponse> {
    let category = match product.category_id {
        Some(category_id) => state
            .category_service
            .get_by_id(category_id)
            .await
            .map_err(|err| {
                error!(error = %err, category_id, "Failed to fetch category");
                err
            })?,
        None => None,
    };

    Ok(ProductResponse::new(product, category.as_ref()))
}

#[instrument(name = "handler::create_product", skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> CoreResult<(StatusCode, Json<Product>)> {
    info!("Handling CreateProduct request");
    let product = decode_product(&body, false)?;

    let created = state.product_service.create(&product).await.map_err(|err| {
        error!(error = %err, "Error creating product");
        err
    })?;

    info!(id = created.id, "Product created successfully");
    Ok((StatusCode::CREATED, Json(created)))
}

/// 返回请求中提交的对象（id 取自路径），而非合并后的持久化状态
#[instrument(name = "handler::update_product", skip(state, body))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> CoreResult<Json<Product>> {
    info!("Handling UpdateProduct request");
    let id = parse_id(&raw_id, "product")?;
    let mut product = decode_product(&body, false)?;
    product.id = id;

    match state.product_service.update(&product).await {
        Ok(_) => {
            info!(id, "Product updated successfully");
            Ok(Json(product))
        }
        Err(err @ CoreError::NotFound(_)) => {
            warn!(id, "Product not found");
            Err(err)
        }
        Err(err) => {
            error!(id, error = %err, "Failed to update product");
            Err(err)
        }
    }
}

#[instrument(name = "handler::delete_product", skip(state, body))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> CoreResult<StatusCode> {
    info!("Handling DeleteProduct request");
    let id = parse_id(&raw_id, "product")?;
    let mut product = decode_product(&body, true)?;
    product.id = id;

    match state.product_service.delete(&product).await {
        Ok(()) => {
            info!(id, "Product deleted successfully");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(err @ CoreError::NotFound(_)) => {
            warn!(id, "Product not found");
            Err(err)
        }
        Err(err) => {
            error!(id, error = %err, "Failed to delete product");
            Err(err)
        }
    }
}

#[instrument(name = "handler::list_products", skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> CoreResult<Json<Vec<ProductResponse>>> {
    info!("Handling GetAllProducts request");
    let products = state.product_service.get_all().await.map_err(|err| {
        error!(error = %err, "Failed to fetch products");
        err
    })?;

    let mut responses = Vec::with_capacity(products.len());
    for product in products {
        responses.push(with_category(&state, product).await?);
    }

    info!(count = responses.len(), "Successfully fetched all products");
    Ok(Json(responses))
}

#[instrument(name = "handler::get_product", skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> CoreResult<Json<ProductResponse>> {
    let id = parse_id(&raw_id, "product")?;
    let product = state.product_service.get_by_id(id).await?;
    Ok(Json(with_category(&state, product).await?))
}
