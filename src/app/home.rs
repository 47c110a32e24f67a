//! 首页与健康检查

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use tera::Context;

use super::AppState;
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub storage: &'static str,
    pub products: usize,
}

pub async fn top(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    state.templates.render("top.html", &Context::new()).map(Html)
}

/// 通过一次计数查询确认存储可用
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthStatus>>, CoreError> {
    let products = state.product_service.count().await?;

    Ok(Json(ApiResponse::success(HealthStatus {
        status: "healthy",
        storage: state.product_service.storage_backend(),
        products,
    })))
}
