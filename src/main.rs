use std::time::Duration;

use product_catalog::{
    app::{product::ProductService, router, AppState},
    config::AppConfig,
    infrastructure::{build_repository, logger::Logger, templates::TemplateRenderer},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    Logger::init(&config.log_level);

    info!("启动商品目录服务器...");

    let repository = build_repository(&config.database).await.map_err(|e| {
        error!("Failed to initialize storage: {}", e);
        e
    })?;

    let product_service = ProductService::new(repository, config.pagination.per_page);
    if config.seed {
        product_service.seed_samples().await?;
    }

    let state = AppState::new(product_service, TemplateRenderer::new()?);
    let app = router(state).layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        ))),
    );

    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 商品目录运行在 http://{}", addr);
    info!("   GET       /products/             - 商品列表 (?page=N)");
    info!("   GET/POST  /products/new          - 新建商品");
    info!("   GET       /products/:id/         - 商品详情");
    info!("   GET/POST  /products/:id/edit     - 编辑商品");
    info!("   GET/POST  /products/:id/delete   - 删除商品");
    info!("   GET       /health                - 健康检查");

    axum::serve(listener, app).await?;

    Ok(())
}
