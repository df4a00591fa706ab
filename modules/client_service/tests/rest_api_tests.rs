#![allow(clippy::unwrap_used, clippy::expect_used)]

//! REST layer tests: routing, envelope shape and status codes

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use client_service::api::rest::routes::register_routes;
use common::{case_summary, service_with, StubDirectory};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(directory: StubDirectory) -> (Router, Arc<StubDirectory>) {
    let (service, _, directory) = service_with(directory);
    let app = Router::new().nest("/api/v1", register_routes(Router::new(), service));
    (app, directory)
}

fn app() -> Router {
    app_with(StubDirectory::default()).0
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/api/v1/clients", Some(body), None).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"].clone()
}

#[tokio::test]
async fn create_returns_created_envelope() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({ "name": "Jane", "surname": "Smith", "email": "Jane@Example.com", "taxId": "TX-1" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Client created successfully");
    assert_eq!(body["data"]["email"], "jane@example.com");
    assert_eq!(body["data"]["taxId"], "TX-1");
    assert_eq!(body["data"]["active"], true);
}

#[tokio::test]
async fn missing_names_are_field_errors() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/v1/clients", Some(json!({})), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["errors"]["name"].is_string());
    assert!(body["errors"]["surname"].is_string());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = app();
    create(&app, json!({ "name": "Ann", "surname": "One", "email": "a@x.com" })).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/clients",
        Some(json!({ "name": "Ann", "surname": "Two", "email": "a@x.com" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert!(body["errors"]["email"].is_string());
}

#[tokio::test]
async fn lookups_search_and_active() {
    let app = app();
    let jane = create(&app, json!({ "name": "Jane", "surname": "Smith", "email": "jane@x.com" })).await;
    create(&app, json!({ "name": "John", "surname": "SMITH", "active": false })).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/clients/email/jane@x.com", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], jane["id"]);

    let (_, body) = send(&app, Method::GET, "/api/v1/clients/search?term=smi", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/api/v1/clients/active", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/api/v1/clients", None, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, _) = send(&app, Method::GET, "/api/v1/clients/search", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_and_delete() {
    let app = app();
    let jane = create(&app, json!({ "name": "Jane", "surname": "Smith" })).await;
    let id = jane["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/clients/{id}"),
        Some(json!({ "phone": "+1 555 0100", "name": "" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["phone"], "+1 555 0100");
    assert_eq!(body["data"]["name"], "Jane");

    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/clients/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/clients/{id}"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn client_cases_forward_the_bearer_token() {
    let (app, directory) = app_with(StubDirectory {
        cases: vec![case_summary(10, vec![1])],
        ..StubDirectory::default()
    });
    create(&app, json!({ "name": "Jane", "surname": "Smith" })).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/clients/1/cases", None, Some("tok")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["caseNumber"], "CASE-2026-0000000A");
    assert_eq!(
        directory.seen_tokens.read().as_slice(),
        &[Some("tok".to_string())]
    );

    let (status, body) = send(&app, Method::GET, "/api/v1/clients/1/cases/10", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 10);
}

#[tokio::test]
async fn unreachable_case_service() {
    let (app, _) = app_with(StubDirectory {
        unreachable: true,
        ..StubDirectory::default()
    });
    create(&app, json!({ "name": "Jane", "surname": "Smith" })).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/clients/1/cases", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = send(&app, Method::GET, "/api/v1/clients/1/cases/10", None, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn cases_of_unknown_client_is_not_found() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/v1/clients/42/cases", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
