//! 基础设施层：数据库、日志、模板

#[cfg(feature = "database")]
pub mod database;
pub mod logger;
pub mod templates;

use std::sync::Arc;
use tracing::info;

use crate::app::product::{MemoryProductRepository, ProductRepository};
use crate::config::DatabaseConfig;
use crate::core::error::Result;

/// 按配置选择存储：配置了数据库地址时使用 PostgreSQL，否则使用内存
pub async fn build_repository(config: &DatabaseConfig) -> Result<Arc<dyn ProductRepository>> {
    match config.url.as_deref() {
        Some(url) => connect_database(url, config.max_connections).await,
        None => {
            info!("未配置数据库地址，使用内存存储");
            Ok(Arc::new(MemoryProductRepository::new()))
        }
    }
}

#[cfg(feature = "database")]
async fn connect_database(url: &str, max_connections: u32) -> Result<Arc<dyn ProductRepository>> {
    let manager = database::DatabaseManager::new(url, max_connections).await?;
    manager.create_tables().await?;
    Ok(Arc::new(database::PgProductRepository::new(
        manager.get_pool().clone(),
    )))
}

#[cfg(not(feature = "database"))]
async fn connect_database(_url: &str, _max_connections: u32) -> Result<Arc<dyn ProductRepository>> {
    tracing::warn!("未启用 database 特性，忽略数据库地址，使用内存存储");
    Ok(Arc::new(MemoryProductRepository::new()))
}
