//! 商品数据模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品名称的最大字符数，对应 `VARCHAR(255)`
pub const NAME_MAX_LEN: usize = 255;

/// 价格的小数位数，对应 `NUMERIC(12, 2)`
pub const PRICE_SCALE: u32 = 2;

/// 价格整数部分的最大位数
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

/// 通过校验的表单数据，插入和更新都只接受它
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

impl NewProduct {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}
