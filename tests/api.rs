use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use user_api::{
    converter::UserConverter, routes::create_router, service::UserService, state::AppState,
    store::InMemoryUserStore,
};

fn app() -> Router {
    let service = UserService::new(Arc::new(InMemoryUserStore::new()), UserConverter);
    create_router(AppState::new(service))
}

async fn call(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn user_lifecycle() {
    let app = app();

    let response = call(
        &app,
        with_json(
            "POST",
            "/api/v1/users",
            &json!({
                "firstName": "A",
                "lastName": "B",
                "email": "a@b.com",
                "password": "Abcdef1!"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    let id = created["id"].as_str().expect("assigned id").to_string();
    assert_eq!(created["firstName"], "A");
    assert_eq!(created["lastName"], "B");
    assert_eq!(created["email"], "a@b.com");

    let uri = format!("/api/v1/users/{id}");

    let response = call(&app, get(&uri)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(fetched, created);

    let response = call(&app, delete(&uri)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = call(&app, get(&uri)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(error, json!({ "errors": ["User with such id not found"] }));
}

#[tokio::test]
async fn edit_then_reuse_released_email() {
    let app = app();
    let first = json!({
        "firstName": "First",
        "lastName": "User",
        "email": "first@domain.com",
        "password": "Password1#"
    });

    let response = call(&app, with_json("POST", "/api/v1/users", &first)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();

    let mut renamed = first.clone();
    renamed["id"] = created["id"].clone();
    renamed["email"] = json!("renamed@domain.com");
    let response = call(&app, with_json("PUT", "/api/v1/users", &renamed)).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The old address is free again once its owner moved off it.
    let response = call(&app, with_json("POST", "/api/v1/users", &first)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = call(&app, with_json("POST", "/api/v1/users", &renamed)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let error: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(error, json!({ "errors": ["User with such email already exists"] }));
}
