//! # 商品目录 Web 应用
//!
//! 基于 Axum 的服务端渲染 CRUD 应用，包括：
//! - 商品列表（带分页）、详情、创建、更新、删除
//! - PostgreSQL (sqlx) 与内存两种存储实现
//! - Tera 模板渲染
//! - figment 分层配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use config::AppConfig;
pub use self::core::error::{CoreError, Result};
