//! 商品处理器

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
    response::{Html, IntoResponse, Response},
    Form,
};
use tera::Context;
use tracing::info;

use super::form::{FormErrors, ProductForm};
use super::model::Product;
use crate::app::AppState;
use crate::core::error::CoreError;
use crate::core::response::redirect_found;

pub const PRODUCT_LIST_PATH: &str = "/products/";

/// 路径中的商品 id，无法解析时按不存在处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| CoreError::not_found("商品"))?;

        raw.parse()
            .map(ProductId)
            .map_err(|_| CoreError::not_found(format!("商品 {}", raw)))
    }
}

/// 查询参数按原始键值对接收，重复的 `page` 取最后一个
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, CoreError> {
    let raw_page = params
        .iter()
        .rev()
        .find(|(key, _)| key == "page")
        .map(|(_, value)| value.as_str());

    let (page, paginator) = state.product_service.list_page(raw_page).await?;

    let mut context = Context::new();
    context.insert("object_list", &page.items);
    context.insert("is_paginated", &page.has_other_pages);
    context.insert("page_obj", &page);
    context.insert("paginator", &paginator.summary());

    state.templates.render("product_list.html", &context).map(Html)
}

pub async fn product_detail(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Html<String>, CoreError> {
    let product = state.product_service.get_product(id).await?;

    let mut context = Context::new();
    context.insert("product", &product);

    state
        .templates
        .render("product_detail.html", &context)
        .map(Html)
}

pub async fn new_product(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    render_form(&state, &ProductForm::default(), &FormErrors::default(), None)
}

pub async fn create_product(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, CoreError> {
    let form = ProductForm::from_pairs(fields);
    match form.clean() {
        Ok(new_product) => {
            let product = state.product_service.create_product(new_product).await?;
            info!("Created product: {} ({})", product.name, product.id);
            Ok(redirect_found(PRODUCT_LIST_PATH))
        }
        Err(errors) => Ok(render_form(&state, &form, &errors, None)?.into_response()),
    }
}

pub async fn edit_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Html<String>, CoreError> {
    let product = state.product_service.get_product(id).await?;
    let form = ProductForm::from_product(&product);
    render_form(&state, &form, &FormErrors::default(), Some(&product))
}

pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, CoreError> {
    let form = ProductForm::from_pairs(fields);
    let product = state.product_service.get_product(id).await?;

    match form.clean() {
        Ok(changes) => {
            let product = state.product_service.update_product(product.id, changes).await?;
            info!("Updated product: {} ({})", product.name, product.id);
            Ok(redirect_found(PRODUCT_LIST_PATH))
        }
        Err(errors) => Ok(render_form(&state, &form, &errors, Some(&product))?.into_response()),
    }
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Html<String>, CoreError> {
    let product = state.product_service.get_product(id).await?;

    let mut context = Context::new();
    context.insert("product", &product);

    state
        .templates
        .render("product_confirm_delete.html", &context)
        .map(Html)
}

pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Response, CoreError> {
    state.product_service.delete_product(id).await?;
    info!("Deleted product: {}", id);
    Ok(redirect_found(PRODUCT_LIST_PATH))
}

/// 创建和编辑共用的表单页，`product` 为 `None` 表示创建
fn render_form(
    state: &AppState,
    form: &ProductForm,
    errors: &FormErrors,
    product: Option<&Product>,
) -> Result<Html<String>, CoreError> {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("errors", errors);
    context.insert("is_edit", &product.is_some());

    match product {
        Some(product) => {
            context.insert("action", &format!("/products/{}/edit", product.id));
            context.insert("object", product);
        }
        None => context.insert("action", "/products/new"),
    }

    state.templates.render("product_form.html", &context).map(Html)
}
