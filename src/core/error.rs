//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// 核心错误类型
///
/// 表单校验失败不属于这里，由处理器重新渲染表单。
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("未找到: {0}")]
    NotFound(String),

    #[error("模板渲染失败: {0}")]
    Template(#[from] tera::Error),

    #[cfg(feature = "database")]
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            CoreError::NotFound(_) => "请求的页面不存在。",
            other => {
                error!("请求处理失败: {}", other);
                "服务器内部错误，请稍后再试。"
            }
        };

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"zh\">\n<head><meta charset=\"utf-8\"><title>{code}</title></head>\n<body>\n<h1>{code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/products/\">返回商品列表</a></p>\n</body>\n</html>\n",
            code = status.as_u16(),
            reason = status.canonical_reason().unwrap_or_default(),
        );

        (status, Html(body)).into_response()
    }
}
