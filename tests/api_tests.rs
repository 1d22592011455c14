use product_catalog::{build_app, Product, ProductService, ProductStore};
use serde_json::{json, Value};
use std::time::Duration;

/// 在系统分配的端口上启动服务，返回基础 URL
async fn spawn_test_server(store: ProductStore) -> String {
    let app = build_app(ProductService::new(store), Duration::from_secs(5));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn list(base: &str) -> Value {
    reqwest::get(format!("{}/products", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/products", base))
        .json(&body)
        .send()
        .await
        .unwrap()
}

fn ids(listing: &Value) -> Vec<&str> {
    listing
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn root_returns_welcome_text() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let resp = reqwest::get(&base).await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(resp.text().await.unwrap(), "Welcome to the Product API");
}

#[tokio::test]
async fn lists_seeded_fixtures() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let listing = list(&base).await;

    assert_eq!(
        listing,
        json!([
            {"id": "1", "name": "Laptop", "price": 1000, "category": "Electronics"},
            {"id": "2", "name": "Shoes", "price": 50, "category": "Fashion"},
            {"id": "3", "name": "Watch", "price": 200, "category": "Accessories"}
        ])
    );
}

#[tokio::test]
async fn empty_store_returns_message_payload() {
    let base = spawn_test_server(ProductStore::new()).await;
    let resp = reqwest::get(format!("{}/products", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "No products available"}));
}

#[tokio::test]
async fn insert_then_delete_scenario() {
    let base = spawn_test_server(ProductStore::seeded()).await;

    let resp = post(
        &base,
        json!({"id": "4", "name": "Bag", "price": 80, "category": "Fashion"}),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let created: Product = resp.json().await.unwrap();
    assert_eq!(created, Product::new("4", "Bag", 80, "Fashion"));

    let listing = list(&base).await;
    assert_eq!(ids(&listing), vec!["1", "2", "3", "4"]);
    assert_eq!(
        listing[3],
        json!({"id": "4", "name": "Bag", "price": 80, "category": "Fashion"})
    );

    let client = reqwest::Client::new();
    let resp = client
        .delete(format!("{}/products/2", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Product with ID 2 deleted");
    assert_eq!(ids(&list(&base).await), vec!["1", "3", "4"]);

    let resp = client
        .delete(format!("{}/products/2", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "Product with ID 2 not found");
}

#[tokio::test]
async fn duplicate_id_is_rejected() {
    let base = spawn_test_server(ProductStore::seeded()).await;

    let resp = post(
        &base,
        json!({"id": "1", "name": "Tablet", "price": 300, "category": "Electronics"}),
    )
    .await;
    assert_eq!(resp.status(), 400);
    assert_eq!(
        resp.text().await.unwrap(),
        "Product with ID 1 already exists"
    );

    let listing = list(&base).await;
    assert_eq!(listing.as_array().unwrap().len(), 3);
    assert_eq!(listing[0]["name"], "Laptop");
}

#[tokio::test]
async fn validation_failures_return_first_message() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let cases = [
        (
            json!({"id": "4", "name": "Bag", "price": 80}),
            "All fields are required",
        ),
        (
            json!({"id": "0", "name": "Bag", "price": 80, "category": "Fashion"}),
            "ID must be a positive number and no more than 10 characters long",
        ),
        (
            json!({"id": "4", "name": "42", "price": 80, "category": "Fashion"}),
            "Name must be a valid string between 2 and 20 characters long",
        ),
        (
            json!({"id": "4", "name": "Bag", "price": "-5", "category": "Fashion"}),
            "Enter a valid price (positive number, no more than 10 characters)",
        ),
        (
            json!({"id": "4", "name": "Bag", "price": 80, "category": "x"}),
            "Category must be a valid string between 2 and 20 characters long",
        ),
    ];

    for (body, expected) in cases {
        let resp = post(&base, body).await;
        assert_eq!(resp.status(), 400);
        assert_eq!(resp.text().await.unwrap(), expected);
    }

    assert_eq!(ids(&list(&base).await), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn non_json_body_counts_as_missing_fields() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/products", base))
        .body("id=4")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.text().await.unwrap(), "All fields are required");

    let resp = client
        .post(format!("{}/products", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn delete_all_empties_store() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let resp = client
            .delete(format!("{}/products", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.text().await.unwrap(),
            "All products have been deleted"
        );
    }

    assert_eq!(
        list(&base).await,
        json!({"message": "No products available"})
    );
}

#[tokio::test]
async fn responses_allow_any_origin_and_carry_request_id() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let resp = reqwest::Client::new()
        .get(format!("{}/products", base))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn price_text_is_stored_as_sent() {
    let base = spawn_test_server(ProductStore::seeded()).await;

    let resp = post(
        &base,
        json!({"id": "4", "name": "Bag", "price": "80.50", "category": "Fashion"}),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["price"], json!("80.50"));

    let listing = list(&base).await;
    assert_eq!(listing[3]["price"], json!("80.50"));
}

#[tokio::test]
async fn array_body_counts_as_missing_fields() {
    let base = spawn_test_server(ProductStore::seeded()).await;

    let resp = post(&base, json!(["4", "Bag", 80, "Fashion"])).await;
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.text().await.unwrap(), "All fields are required");

    assert_eq!(ids(&list(&base).await), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn preflight_carries_request_id() {
    let base = spawn_test_server(ProductStore::seeded()).await;
    let resp = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/products", base))
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    assert!(resp.headers().contains_key("x-request-id"));
}
