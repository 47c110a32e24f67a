//! 商品存储抽象与内存实现

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::model::{NewProduct, Product};
use crate::core::error::Result;

/// 商品持久化接口，列表始终按 `id` 升序
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn count(&self) -> Result<usize>;

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Product>>;

    async fn find(&self, id: i64) -> Result<Option<Product>>;

    async fn insert(&self, product: NewProduct) -> Result<Product>;

    /// 商品不存在时返回 `None`
    async fn update(&self, id: i64, product: NewProduct) -> Result<Option<Product>>;

    /// 返回是否删除了一行
    async fn delete(&self, id: i64) -> Result<bool>;

    /// 存储后端名称，用于健康检查
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Default)]
struct MemoryStore {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

/// 内存存储，id 从 1 开始递增且不复用
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    store: RwLock<MemoryStore>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn count(&self) -> Result<usize> {
        Ok(self.store.read().await.rows.len())
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.store.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let product = product.into_product(store.last_id);
        store.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, product: NewProduct) -> Result<Option<Product>> {
        let mut store = self.store.write().await;
        Ok(store.rows.get_mut(&id).map(|row| {
            row.name = product.name;
            row.price = product.price;
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.store.write().await.rows.remove(&id).is_some())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
