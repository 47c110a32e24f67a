//! 应用层：路由与处理器

pub mod home;
pub mod product;

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::templates::TemplateRenderer;
use product::{handler, ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub templates: Arc<TemplateRenderer>,
}

impl AppState {
    pub fn new(product_service: ProductService, templates: TemplateRenderer) -> Self {
        Self {
            product_service,
            templates: Arc::new(templates),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::top))
        .route("/health", get(home::health_check))
        .route("/products/", get(handler::list_products))
        .route(
            "/products/new",
            get(handler::new_product).post(handler::create_product),
        )
        .route("/products/:id/", get(handler::product_detail))
        .route(
            "/products/:id/edit",
            get(handler::edit_product).post(handler::update_product),
        )
        .route(
            "/products/:id/delete",
            get(handler::confirm_delete).post(handler::delete_product),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
