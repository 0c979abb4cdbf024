// Integration tests for `CatalogClient` using wiremock.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storefront_api::catalog::types::ProductWriteBody;
use storefront_api::{CatalogClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let client = CatalogClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn product_body(id: i64, title: &str, price: f64, category: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": "A fine item",
        "category": category,
        "image": "https://i.example.com/img.jpg"
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_products() {
    let (server, client) = setup().await;

    let body = json!([
        product_body(1, "Backpack", 109.95, "men's clothing"),
        product_body(2, "T-Shirt", 22.3, "men's clothing"),
        product_body(3, "Gold Ring", 168.0, "jewelery"),
    ]);

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let products = client.list_products().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].title, "Backpack");
    assert!((products[1].price - 22.3).abs() < f64::EPSILON);
    assert_eq!(products[2].category, "jewelery");
}

#[tokio::test]
async fn test_get_product() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(product_body(7, "Monitor", 599.0, "electronics")),
        )
        .mount(&server)
        .await;

    let product = client.get_product("7").await.unwrap();

    assert_eq!(product.id, 7);
    assert_eq!(product.title, "Monitor");
    assert_eq!(product.image.as_deref(), Some("https://i.example.com/img.jpg"));
}

#[tokio::test]
async fn test_create_product() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_partial_json(json!({ "title": "Lamp", "price": 14.5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 21,
            "title": "Lamp",
            "price": 14.5,
            "description": "Desk lamp",
            "category": "home"
        })))
        .mount(&server)
        .await;

    let body = ProductWriteBody {
        title: Some("Lamp".into()),
        price: Some(14.5),
        description: Some("Desk lamp".into()),
        image: None,
        category: Some("home".into()),
    };

    let created = client.create_product(&body).await.unwrap();

    assert_eq!(created.id, 21);
    assert_eq!(created.category, "home");
    assert!(created.image.is_none());
}

#[tokio::test]
async fn test_delete_product() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/products/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client.delete_product("2").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.get_product("404").await;

    match result {
        Err(err) => assert!(err.is_not_found(), "expected not-found, got: {err:?}"),
        other => panic!("expected Http 404 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_500_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.list_products().await;

    match result {
        Err(Error::Http { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Http 500 error, got: {other:?}"),
    }
}
