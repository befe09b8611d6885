//! Handler tests for Products domain
//!
//! These tests drive the products router the way the binary mounts it
//! (under `/produtos`) and check:
//! - Status codes for every verb
//! - Wire field names (`id`, `nome`, `preco`)
//! - The `mensagem` body for missing products
//! - Rejections for malformed ids and bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app_with(repository: InMemoryProductRepository) -> Router {
    Router::new().nest(
        "/produtos",
        handlers::router(ProductService::new(repository)),
    )
}

fn app() -> Router {
    app_with(InMemoryProductRepository::new())
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn not_found_body() -> Value {
    json!({ "mensagem": "Produto não encontrado" })
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let response = app().oneshot(empty_request("GET", "/produtos")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_create_returns_201_with_assigned_id() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/produtos",
            json!({ "nome": "Caneta", "preco": 2.5 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "id": 1, "nome": "Caneta", "preco": 2.5 })
    );
}

#[tokio::test]
async fn test_list_returns_products_in_creation_order() {
    let app = app();
    for (nome, preco) in [("A", 10.0), ("B", 20.0)] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/produtos",
                json!({ "nome": nome, "preco": preco }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(empty_request("GET", "/produtos")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!([
            { "id": 1, "nome": "A", "preco": 10.0 },
            { "id": 2, "nome": "B", "preco": 20.0 }
        ])
    );
}

#[tokio::test]
async fn test_get_existing_product() {
    let app = app_with(InMemoryProductRepository::with_seed([
        CreateProduct::new("A", 10.0),
        CreateProduct::new("B", 20.0),
    ]));

    let response = app.oneshot(empty_request("GET", "/produtos/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "id": 2, "nome": "B", "preco": 20.0 })
    );
}

#[tokio::test]
async fn test_get_missing_product_returns_mensagem() {
    let response = app()
        .oneshot(empty_request("GET", "/produtos/99"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response.into_body()).await, not_found_body());
}

#[tokio::test]
async fn test_update_replaces_name_and_price() {
    let app = app_with(InMemoryProductRepository::with_seed([CreateProduct::new(
        "A", 10.0,
    )]));

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/produtos/1",
            json!({ "nome": "A2", "preco": 15.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({ "id": 1, "nome": "A2", "preco": 15.0 })
    );

    let response = app.oneshot(empty_request("GET", "/produtos/1")).await.unwrap();
    assert_eq!(json_body(response.into_body()).await["nome"], "A2");
}

#[tokio::test]
async fn test_update_missing_product_returns_mensagem() {
    let response = app()
        .oneshot(json_request(
            "PUT",
            "/produtos/7",
            json!({ "nome": "X", "preco": 1.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response.into_body()).await, not_found_body());
}

#[tokio::test]
async fn test_delete_returns_204_with_empty_body() {
    let app = app_with(InMemoryProductRepository::with_seed([
        CreateProduct::new("A", 10.0),
        CreateProduct::new("B", 20.0),
    ]));

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/produtos/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.oneshot(empty_request("GET", "/produtos")).await.unwrap();
    assert_eq!(
        json_body(response.into_body()).await,
        json!([{ "id": 2, "nome": "B", "preco": 20.0 }])
    );
}

#[tokio::test]
async fn test_delete_missing_product_returns_mensagem() {
    let app = app_with(InMemoryProductRepository::with_seed([CreateProduct::new(
        "A", 10.0,
    )]));

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/produtos/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response.into_body()).await, not_found_body());

    let response = app.oneshot(empty_request("GET", "/produtos")).await.unwrap();
    assert_eq!(json_body(response.into_body()).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_after_delete_does_not_reuse_id() {
    let app = app_with(InMemoryProductRepository::with_seed([
        CreateProduct::new("A", 10.0),
        CreateProduct::new("B", 20.0),
    ]));

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/produtos/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(json_request(
            "POST",
            "/produtos",
            json!({ "nome": "C", "preco": 5.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response.into_body()).await["id"], 3);
}

#[tokio::test]
async fn test_non_numeric_id_returns_400() {
    let response = app()
        .oneshot(empty_request("GET", "/produtos/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_id_aliases_are_rejected() {
    let app = app_with(InMemoryProductRepository::with_seed([CreateProduct::new(
        "A", 10.0,
    )]));

    for uri in ["/produtos/+1", "/produtos/%201", "/produtos/01"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json_body(response.into_body()).await["error"], "INVALID_ID");
    }
}

/// Create, read, update and delete in sequence on one router, then check
/// that a freed id is not handed out again and that deleting an unknown id
/// leaves the collection alone.
#[tokio::test]
async fn test_crud_sequence_keeps_ids_monotonic() {
    let app = app();
    let send = |request: Request<Body>| {
        let app = app.clone();
        async move {
            let response = app.oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let body = if bytes.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&bytes).unwrap()
            };
            (status, body)
        }
    };

    // Create A and B
    let (status, body) = send(json_request(
        "POST",
        "/produtos",
        json!({ "nome": "Produto A", "preco": 100.0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "nome": "Produto A", "preco": 100.0 }));

    let (status, body) = send(json_request(
        "POST",
        "/produtos",
        json!({ "nome": "Produto B", "preco": 200.0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 2, "nome": "Produto B", "preco": 200.0 }));

    let (_, body) = send(empty_request("GET", "/produtos")).await;
    assert_eq!(
        body,
        json!([
            { "id": 1, "nome": "Produto A", "preco": 100.0 },
            { "id": 2, "nome": "Produto B", "preco": 200.0 }
        ])
    );

    // Get existing and missing
    let (status, body) = send(empty_request("GET", "/produtos/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "nome": "Produto A", "preco": 100.0 }));

    let (status, body) = send(empty_request("GET", "/produtos/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found_body());

    // Update 1
    let (status, body) = send(json_request(
        "PUT",
        "/produtos/1",
        json!({ "nome": "Produto A Modificado", "preco": 150.0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    let modified = json!({ "id": 1, "nome": "Produto A Modificado", "preco": 150.0 });
    assert_eq!(body, modified);

    let (_, body) = send(empty_request("GET", "/produtos/1")).await;
    assert_eq!(body, modified);

    // Delete 1
    let (status, body) = send(empty_request("DELETE", "/produtos/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(empty_request("GET", "/produtos/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(empty_request("GET", "/produtos")).await;
    assert_eq!(body, json!([{ "id": 2, "nome": "Produto B", "preco": 200.0 }]));

    // Create C after the delete: id 3, not 2
    let (status, body) = send(json_request(
        "POST",
        "/produtos",
        json!({ "nome": "Produto C", "preco": 300.0 }),
    ))
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 3, "nome": "Produto C", "preco": 300.0 }));

    // Delete an id that never existed
    let (_, before) = send(empty_request("GET", "/produtos")).await;
    let (status, body) = send(empty_request("DELETE", "/produtos/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, not_found_body());

    let (_, after) = send(empty_request("GET", "/produtos")).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_create_missing_field_returns_422() {
    let response = app()
        .oneshot(json_request("POST", "/produtos", json!({ "nome": "Sem preço" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(response.into_body()).await["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_create_wrong_type_returns_422() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/produtos",
            json!({ "nome": "Caneta", "preco": "barato" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_without_content_type_returns_415() {
    let request = Request::builder()
        .method("POST")
        .uri("/produtos")
        .body(Body::from(r#"{"nome":"Caneta","preco":2.5}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let request = Request::builder()
        .method("PUT")
        .uri("/produtos/1")
        .header("content-type", "application/json")
        .body(Body::from("{ nome: "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response.into_body()).await["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_openapi_document_lists_product_paths() {
    use utoipa::OpenApi;

    let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
    assert!(doc["paths"].get("/{id}").is_some());
    assert!(doc["components"]["schemas"]["Product"]["properties"]
        .get("nome")
        .is_some());
}
