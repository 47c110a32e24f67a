use axum::http::StatusCode;
use axum_test::TestServer;
use product_catalog::app::product::{MemoryProductRepository, NewProduct, ProductForm, ProductService};
use product_catalog::app::{router, AppState};
use product_catalog::infrastructure::templates::TemplateRenderer;
use rust_decimal::Decimal;
use std::sync::Arc;

fn create_test_app(per_page: usize) -> (TestServer, ProductService) {
    let service = ProductService::new(Arc::new(MemoryProductRepository::new()), per_page);
    let templates = TemplateRenderer::new().unwrap();
    let server = TestServer::new(router(AppState::new(service.clone(), templates))).unwrap();
    (server, service)
}

async fn seed(service: &ProductService, count: i64) {
    for i in 1..=count {
        service
            .create_product(NewProduct {
                name: format!("Product {i}"),
                price: Decimal::new(i * 1000, 2),
            })
            .await
            .unwrap();
    }
}

fn form(name: &str, price: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        price: price.to_string(),
    }
}

#[tokio::test]
async fn test_top_page() {
    let (server, _) = create_test_app(3);

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("/products/"));
}

#[tokio::test]
async fn test_health_check() {
    let (server, service) = create_test_app(3);
    seed(&service, 2).await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["storage"], "memory");
    assert_eq!(body["data"]["products"], 2);
}

#[tokio::test]
async fn test_list_third_page_of_seven() {
    let (server, service) = create_test_app(3);
    seed(&service, 7).await;

    let response = server.get("/products/").add_query_param("page", "3").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Product 7"));
    for i in 1..=6 {
        assert!(!html.contains(&format!("Product {i}<")), "page 3 shows Product {i}");
    }
    assert!(html.contains("3 / 3"));
    assert!(html.contains("?page=2"));
}

#[tokio::test]
async fn test_list_invalid_pages_show_first_page() {
    let (server, service) = create_test_app(3);
    seed(&service, 7).await;

    let first = server.get("/products/").await.text();
    assert!(first.contains("Product 1"));
    assert!(first.contains("Product 3"));
    assert!(!first.contains("Product 4"));

    for page in ["1", "0", "-1", "abc"] {
        let response = server.get("/products/").add_query_param("page", page).await;
        response.assert_status_ok();
        assert_eq!(response.text(), first, "page={page}");
    }
}

#[tokio::test]
async fn test_list_out_of_range_page_shows_last_page() {
    let (server, service) = create_test_app(3);
    seed(&service, 7).await;

    let last = server.get("/products/").add_query_param("page", "3").await.text();
    let beyond = server.get("/products/").add_query_param("page", "99").await;
    beyond.assert_status_ok();
    assert_eq!(beyond.text(), last);
}

#[tokio::test]
async fn test_list_repeated_page_uses_last_value() {
    let (server, service) = create_test_app(3);
    seed(&service, 7).await;

    let third = server.get("/products/").add_query_param("page", "3").await.text();

    let response = server.get("/products/?page=2&page=3").await;
    response.assert_status_ok();
    assert_eq!(response.text(), third);

    let response = server.get("/products/?page=3&page=abc").await;
    response.assert_status_ok();
    assert!(response.text().contains("Product 1"));
}

#[tokio::test]
async fn test_list_single_page_hides_pagination() {
    let (server, service) = create_test_app(3);
    seed(&service, 2).await;

    let html = server.get("/products/").await.text();
    assert!(html.contains("Product 2"));
    assert!(!html.contains("?page="));
}

#[tokio::test]
async fn test_create_form_is_empty() {
    let (server, _) = create_test_app(3);

    let response = server.get("/products/new").await;
    response.assert_status_ok();
    assert!(response.text().contains("name=\"name\""));
}

#[tokio::test]
async fn test_create_product_redirects_to_list() {
    let (server, service) = create_test_app(3);

    let response = server.post("/products/new").form(&form("机械键盘", "399")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/products/");
    assert_eq!(service.count().await.unwrap(), 1);

    let product = service.get_product(1).await.unwrap();
    assert_eq!(product.name, "机械键盘");
    assert_eq!(product.price, Decimal::new(39900, 2));
}

#[tokio::test]
async fn test_create_without_name_redisplays_form() {
    let (server, service) = create_test_app(3);

    let response = server.post("/products/new").form(&form("", "10")).await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("此字段为必填项。"));
    assert!(html.contains("value=\"10\""));
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_missing_fields_redisplays_form() {
    let (server, service) = create_test_app(3);

    let response = server
        .post("/products/new")
        .form(&[("price", "abc")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("此字段为必填项。"));
    assert!(html.contains("请输入一个数字。"));
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_with_repeated_field_uses_last_value() {
    let (server, service) = create_test_app(3);

    let response = server
        .post("/products/new")
        .form(&[("name", "a"), ("name", "b"), ("price", "1")])
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(service.get_product(1).await.unwrap().name, "b");
}

#[tokio::test]
async fn test_update_with_repeated_field_uses_last_value() {
    let (server, service) = create_test_app(3);
    seed(&service, 1).await;

    let response = server
        .post("/products/1/edit")
        .form(&[("name", "x"), ("price", "1"), ("price", "2.5")])
        .await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        service.get_product(1).await.unwrap().price,
        Decimal::new(250, 2)
    );
}

#[tokio::test]
async fn test_detail() {
    let (server, service) = create_test_app(3);
    seed(&service, 1).await;

    let response = server.get("/products/1/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Product 1"));
    assert!(html.contains("10.00"));
}

#[tokio::test]
async fn test_detail_not_found() {
    let (server, _) = create_test_app(3);

    server.get("/products/1/").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/products/abc/").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_form_is_populated() {
    let (server, service) = create_test_app(3);
    seed(&service, 1).await;

    let response = server.get("/products/1/edit").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("value=\"Product 1\""));
    assert!(html.contains("value=\"10.00\""));
}

#[tokio::test]
async fn test_update_changes_only_that_row() {
    let (server, service) = create_test_app(3);
    seed(&service, 2).await;

    let response = server.post("/products/1/edit").form(&form("Renamed", "12.5")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/products/");

    let updated = service.get_product(1).await.unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.price, Decimal::new(1250, 2));

    let untouched = service.get_product(2).await.unwrap();
    assert_eq!(untouched.name, "Product 2");
    assert_eq!(service.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_update_invalid_keeps_row() {
    let (server, service) = create_test_app(3);
    seed(&service, 1).await;

    let response = server.post("/products/1/edit").form(&form("", "x")).await;

    response.assert_status_ok();
    assert!(response.text().contains("此字段为必填项。"));
    assert_eq!(service.get_product(1).await.unwrap().name, "Product 1");
}

#[tokio::test]
async fn test_update_not_found() {
    let (server, service) = create_test_app(3);
    seed(&service, 1).await;

    server.get("/products/9/edit").await.assert_status(StatusCode::NOT_FOUND);
    server
        .post("/products/9/edit")
        .form(&form("Ghost", "1"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(service.count().await.unwrap(), 1);
    assert_eq!(service.get_product(1).await.unwrap().name, "Product 1");
}

#[tokio::test]
async fn test_delete_confirmation_page() {
    let (server, service) = create_test_app(3);
    seed(&service, 1).await;

    let response = server.get("/products/1/delete").await;
    response.assert_status_ok();
    assert!(response.text().contains("Product 1"));
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_removes_row_then_detail_is_not_found() {
    let (server, service) = create_test_app(3);
    seed(&service, 3).await;

    let response = server.post("/products/2/delete").await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/products/");

    assert_eq!(service.count().await.unwrap(), 2);
    server.get("/products/2/").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/products/1/").await.assert_status_ok();
    server.get("/products/3/").await.assert_status_ok();
}

#[tokio::test]
async fn test_delete_not_found() {
    let (server, _) = create_test_app(3);

    server.get("/products/5/delete").await.assert_status(StatusCode::NOT_FOUND);
    server.post("/products/5/delete").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (server, _) = create_test_app(3);

    let response = server.get("/products/").await;
    assert!(!response.header("x-request-id").is_empty());
}
