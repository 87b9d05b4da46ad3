//! Menu API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::Dish;
use crate::services::MenuCatalogService;
use crate::services::catalog::DEFAULT_MENU_LIMIT;
use crate::utils::{AppError, AppResult};

/// Query string for `GET /menu`
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    /// Case-insensitive substring over name, description, tags, category
    pub q: Option<String>,
    /// Anchored case-insensitive category match
    pub category: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_MENU_LIMIT
}

/// GET /menu - 菜单查询 (空目录时先写入种子数据)
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<MenuQuery>,
) -> AppResult<Json<Vec<Dish>>> {
    let catalog = MenuCatalogService::new(state.get_db());

    // 尽力而为: 种子失败不阻塞查询
    catalog.seed_if_empty().await;

    let dishes = catalog
        .list_dishes(params.q.as_deref(), params.category.as_deref(), params.limit)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    Ok(Json(dishes))
}
