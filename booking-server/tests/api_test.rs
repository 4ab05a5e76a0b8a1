//! Router-level tests: full middleware stack, driven with `oneshot`

mod common;

use axum::Router;
use axum::body::Body;
use booking_server::routes::build_app;
use common::TestEnv;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

// Far enough ahead to stay in the future relative to the real clock
const DAY: &str = "2099-06-01";

fn app(env: &TestEnv) -> Router {
    build_app(&env.state).with_state(env.state.clone())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn setup(app: &Router) -> (i64, i64, i64) {
    let (status, body) = call(app, Method::POST, "/api/restaurants", Some(json!({"name": "Luca's"}))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let r = body["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/restaurants/{r}/tables");
    let (_, body) = call(app, Method::POST, &uri, Some(json!({"table_number": 1, "capacity": 4}))).await;
    let a = body["data"]["id"].as_i64().unwrap();
    let (_, body) = call(app, Method::POST, &uri, Some(json!({"table_number": 2, "capacity": 2}))).await;
    let b = body["data"]["id"].as_i64().unwrap();
    (r, a, b)
}

#[tokio::test]
async fn test_health() {
    let env = TestEnv::new().await;
    let app = app(&env);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let (_, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn test_booking_flow_over_http() {
    let env = TestEnv::new().await;
    let app = app(&env);
    let (r, a, b) = setup(&app).await;

    let availability = format!("/api/restaurants/{r}/availability?date={DAY}&time=19:00&party_size=2");
    let (status, body) = call(&app, Method::GET, &availability, None).await;
    assert_eq!(status, StatusCode::OK);
    let offered: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(offered, vec![b, a]);

    let booking = json!({
        "user_id": 77,
        "restaurant_id": r,
        "table_id": b,
        "reservation_date": DAY,
        "reservation_time": "19:00",
        "party_size": 2,
        "special_request": "quiet corner"
    });
    let (status, body) = call(&app, Method::POST, "/api/reservations", Some(booking.clone())).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "pending");
    let id = body["data"]["id"].as_i64().unwrap();

    // Same slot again
    let (status, body) = call(&app, Method::POST, "/api/reservations", Some(booking)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);

    let (_, body) = call(&app, Method::GET, &availability, None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // pending -> completed is not an edge
    let status_uri = format!("/api/reservations/{id}/status");
    let (status, body) = call(&app, Method::PUT, &status_uri, Some(json!({"status": "completed"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 3003);

    let (status, body) = call(&app, Method::PUT, &status_uri, Some(json!({"status": "confirmed"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "confirmed");

    // Table with a live future booking cannot be deleted
    let (status, body) = call(&app, Method::DELETE, &format!("/api/tables/{b}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2003);

    let (status, body) = call(&app, Method::POST, &format!("/api/reservations/{id}/cancel"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "cancelled");

    let (status, _) = call(&app, Method::DELETE, &format!("/api/tables/{b}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, Method::GET, "/api/users/77/reservations", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let list = format!("/api/restaurants/{r}/reservations?status=cancelled&date_from={DAY}");
    let (status, body) = call(&app, Method::GET, &list, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn test_error_codes_over_http() {
    let env = TestEnv::new().await;
    let app = app(&env);
    let (r, a, _) = setup(&app).await;

    let (status, body) = call(&app, Method::GET, "/api/reservations/424242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);

    let (status, body) = call(&app, Method::GET, "/api/restaurants/424242/tables", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);

    let too_big = json!({
        "user_id": 1,
        "restaurant_id": r,
        "table_id": a,
        "reservation_date": DAY,
        "reservation_time": "19:00",
        "party_size": 9
    });
    let (status, body) = call(&app, Method::POST, "/api/reservations", Some(too_big)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3005);

    let duplicate_number = json!({"table_number": 1, "capacity": 6});
    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/api/restaurants/{r}/tables"),
        Some(duplicate_number),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2002);

    let bad_range = format!("/api/restaurants/{r}/reservations?date_from=2099-06-05&date_to=2099-06-01");
    let (status, body) = call(&app, Method::GET, &bad_range, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3008);
}
