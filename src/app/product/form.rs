//! 商品表单
//!
//! 字段固定为 `name` 和 `price`，创建与更新共用。

use rust_decimal::Decimal;
use serde::Serialize;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use super::model::{NewProduct, Product, NAME_MAX_LEN, PRICE_MAX_INTEGER_DIGITS, PRICE_SCALE};

const REQUIRED_MESSAGE: &str = "此字段为必填项。";

/// 原始表单数据，缺失的字段按空字符串处理
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ProductForm {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    pub price: String,
}

/// 按字段分组的错误信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    pub name: Vec<String>,
    pub price: Vec<String>,
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut form_errors = FormErrors::default();

        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors.iter().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| error.code.to_string())
            });

            match &*field {
                "name" => form_errors.name.extend(messages),
                "price" => form_errors.price.extend(messages),
                _ => {}
            }
        }

        form_errors
    }
}

impl ProductForm {
    /// 从表单键值对构造，重复字段取最后一个值，未知字段忽略
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "price" => form.price = value,
                _ => {}
            }
        }
        form
    }

    /// 用现有商品填充表单
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
        }
    }

    /// 校验并转换为可持久化的数据
    pub fn clean(&self) -> Result<NewProduct, FormErrors> {
        self.validate()?;

        let price = parse_price(&self.price).map_err(|error| {
            let mut errors = ValidationErrors::new();
            errors.add("price", error);
            FormErrors::from(errors)
        })?;

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            price,
        })
    }
}

fn field_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(field_error("required", REQUIRED_MESSAGE));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(field_error(
            "max_length",
            format!("名称不能超过 {} 个字符。", NAME_MAX_LEN),
        ));
    }
    Ok(())
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    parse_price(price).map(|_| ())
}

/// 解析价格并统一为两位小数
fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(field_error("required", REQUIRED_MESSAGE));
    }

    let mut price =
        Decimal::from_str(raw).map_err(|_| field_error("invalid", "请输入一个数字。"))?;

    if price.scale() > PRICE_SCALE {
        price = price.normalize();
        if price.scale() > PRICE_SCALE {
            return Err(field_error(
                "max_decimal_places",
                format!("小数位数不能超过 {} 位。", PRICE_SCALE),
            ));
        }
    }

    if price.abs() >= Decimal::from(10_i64.pow(PRICE_MAX_INTEGER_DIGITS)) {
        return Err(field_error(
            "max_whole_digits",
            format!("整数部分不能超过 {} 位。", PRICE_MAX_INTEGER_DIGITS),
        ));
    }

    price.rescale(PRICE_SCALE);
    Ok(price)
}
