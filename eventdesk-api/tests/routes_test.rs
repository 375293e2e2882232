/// Integration tests for the EventDesk API router
///
/// These drive the assembled router through tower and assert on status
/// codes and response bodies for the paths that are decided before any
/// database round trip: role checks, field validation, registration policy,
/// and the catch-all 404.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt as _;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
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

fn event_payload() -> Value {
    json!({
        "title": "RustConf",
        "description": "Annual gathering",
        "location": "Montreal",
        "date": "2026-09-01T18:00:00Z",
        "organizer_id": "5f0c3a1e-0000-4000-8000-000000000001",
        "image_url": null
    })
}

#[tokio::test]
async fn test_create_event_without_role_is_forbidden() {
    let app = common::test_app();

    let response = app
        .oneshot(json_request("POST", "/api/events", event_payload()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "forbidden");
    assert_eq!(body["message"], "Only organizers or admins can create events");
}

#[tokio::test]
async fn test_create_event_as_customer_is_forbidden() {
    let app = common::test_app();

    let mut request = json_request("POST", "/api/events", event_payload());
    request
        .headers_mut()
        .insert("x-user-role", "customer".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_event_as_customer_is_forbidden() {
    let app = common::test_app();

    let mut request = json_request(
        "PUT",
        "/api/events/5f0c3a1e-0000-4000-8000-000000000002",
        json!({
            "title": "t",
            "description": null,
            "location": "l",
            "date": "2026-09-01T18:00:00Z",
            "image_url": null
        }),
    );
    request
        .headers_mut()
        .insert("x-user-role", "customer".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Access denied. Admins and organizers only.");
}

#[tokio::test]
async fn test_delete_event_without_role_is_forbidden() {
    let app = common::test_app();

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/events/5f0c3a1e-0000-4000-8000-000000000002")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_register_with_admin_role_is_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({
                "name": "A",
                "email": "a@x.com",
                "password": "p",
                "role": "admin"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid role");
}

#[tokio::test]
async fn test_register_with_empty_fields_is_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({
                "name": "",
                "email": "a@x.com",
                "password": "p",
                "role": "customer"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_register_with_missing_role_key_is_rejected() {
    let app = common::test_app();

    // The key is absent entirely, not just empty; deserialization failures
    // on required fields must still surface as 400.
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({
                "name": "A",
                "email": "a@x.com",
                "password": "p"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_login_with_missing_password_key_is_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/login",
            json!({ "email": "a@x.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_with_missing_password_is_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/users/login",
            json!({ "email": "a@x.com", "password": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_claim_with_missing_event_id_is_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/tickets/claim",
            json!({ "user_id": "5f0c3a1e-0000-4000-8000-000000000001" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Missing user_id or event_id");
}

#[tokio::test]
async fn test_weather_without_city_is_rejected() {
    let app = common::test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/weather/weather")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "City is required");
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = common::test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Route not found");
}
