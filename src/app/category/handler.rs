//! 分类处理器

use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::instrument;

use super::model::Category;
use crate::app::{parse_id, AppState};
use crate::core::{CoreError, CoreResult};

#[instrument(name = "handler::list_categories", skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> CoreResult<Json<Vec<Category>>> {
    let categories = state.category_service.get_all().await?;
    Ok(Json(categories))
}

#[instrument(name = "handler::get_category", skip(state))]
pub async fn get_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> CoreResult<Json<Category>> {
    let id = parse_id(&raw_id, "category")?;

    state
        .category_service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| CoreError::NotFound(format!("category {}", id)))
}
