//! 商品业务服务

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info};

use super::model::{NewProduct, Product};
use super::repository::ProductRepository;
use crate::core::error::{CoreError, Result};
use crate::core::pagination::{Page, Paginator};

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    per_page: usize,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>, per_page: usize) -> Self {
        Self {
            repository,
            per_page: per_page.max(1),
        }
    }

    pub fn storage_backend(&self) -> &'static str {
        self.repository.backend()
    }

    pub async fn count(&self) -> Result<usize> {
        self.repository.count().await
    }

    /// 取一页商品，`raw_page` 是未经处理的查询参数
    pub async fn list_page(&self, raw_page: Option<&str>) -> Result<(Page<Product>, Paginator)> {
        let paginator = Paginator::new(self.repository.count().await?, self.per_page);
        let number = paginator.clamp(raw_page);
        let (offset, limit) = paginator.bounds(number);

        debug!(?raw_page, number, offset, limit, "商品分页");

        let items = self.repository.list(offset, limit).await?;
        Ok((Page::new(items, number, &paginator), paginator))
    }

    pub async fn get_product(&self, id: i64) -> Result<Product> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("商品 {}", id)))
    }

    pub async fn create_product(&self, product: NewProduct) -> Result<Product> {
        self.repository.insert(product).await
    }

    pub async fn update_product(&self, id: i64, product: NewProduct) -> Result<Product> {
        self.repository
            .update(id, product)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("商品 {}", id)))
    }

    pub async fn delete_product(&self, id: i64) -> Result<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(format!("商品 {}", id)))
        }
    }

    /// 表为空时写入示例商品，返回写入的条数
    pub async fn seed_samples(&self) -> Result<usize> {
        if self.repository.count().await? > 0 {
            info!("商品表已有数据，跳过示例数据");
            return Ok(0);
        }

        let samples = [
            ("笔记本电脑", Decimal::new(699900, 2)),
            ("机械键盘", Decimal::new(39900, 2)),
            ("无线鼠标", Decimal::new(12900, 2)),
            ("显示器", Decimal::new(149900, 2)),
            ("USB-C 扩展坞", Decimal::new(25900, 2)),
        ];

        for (name, price) in samples {
            self.repository
                .insert(NewProduct {
                    name: name.to_string(),
                    price,
                })
                .await?;
        }

        info!("✅ 已初始化 {} 个示例商品", samples.len());
        Ok(samples.len())
    }
}
