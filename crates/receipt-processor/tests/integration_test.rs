//! Integration tests for the Receipt Processor API

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use receipt_processor::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

fn create_test_app() -> Router {
    create_router(AppState::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

async fn submit(app: &Router, receipt: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .uri("/receipts/process")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&receipt).unwrap()))
            .unwrap(),
    )
    .await
}

async fn points(app: &Router, id: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .uri(format!("/receipts/{}/points", id))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

fn target_receipt(time: &str, items: Value) -> Value {
    json!({
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": time,
        "items": items,
        "total": "35.35"
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "receipt-processor");
    assert_eq!(json["receipts"], 0);
}

#[tokio::test]
async fn test_process_receipt_success() {
    let app = create_test_app();

    let receipt = target_receipt(
        "13:01",
        json!([
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"}
        ]),
    );

    let (status, json) = submit(&app, receipt).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!json["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_points_success() {
    let app = create_test_app();

    let receipt = target_receipt(
        "13:01",
        json!([
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ]),
    );

    let (_, processed) = submit(&app, receipt).await;
    let id = processed["id"].as_str().unwrap();

    let (status, json) = points(&app, id).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"], 28);
}

#[tokio::test]
async fn test_afternoon_window_boundaries() {
    let app = create_test_app();
    let items = json!([{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}]);

    // Target (6) + odd day (6), plus 10 inside the window
    for (time, expected) in [("13:59", 12), ("14:00", 22), ("15:59", 22), ("16:00", 12)] {
        let (_, processed) = submit(&app, target_receipt(time, items.clone())).await;
        let id = processed["id"].as_str().unwrap();

        let (status, json) = points(&app, id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["points"], expected, "purchase time {}", time);
    }
}

#[tokio::test]
async fn test_process_receipt_invalid_fields() {
    let app = create_test_app();

    let receipt = json!({
        "retailer": "Target",
        "purchaseDate": "invalid_date",
        "purchaseTime": "invalid_time",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "invalid_price"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"}
        ],
        "total": "invalid_total"
    });

    let (status, json) = submit(&app, receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Error in receipt JSON validation");

    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 4);
    assert_eq!(
        fields["Total"],
        "Total must be a valid float value represented as a string"
    );
    assert_eq!(
        fields["PurchaseDate"],
        "PurchaseDate must be in the format YYYY-MM-DD"
    );
    assert_eq!(fields["PurchaseTime"], "PurchaseTime must be in the format HH:MM");
    assert_eq!(
        fields["Price"],
        "Price must be a valid float value represented as a string"
    );
}

#[tokio::test]
async fn test_process_receipt_missing_fields() {
    let app = create_test_app();

    let (status, json) = submit(&app, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields["Retailer"], "Retailer is required and cannot be empty");
    assert_eq!(
        fields["PurchaseDate"],
        "PurchaseDate is required and cannot be empty"
    );
    assert_eq!(
        fields["PurchaseTime"],
        "PurchaseTime is required and cannot be empty"
    );
    assert_eq!(fields["Items"], "At least one item is required in the receipt");
    assert_eq!(fields["Total"], "Total is required and cannot be empty");
}

#[tokio::test]
async fn test_process_receipt_null_fields() {
    let app = create_test_app();

    let receipt = json!({
        "retailer": null,
        "total": null,
        "purchaseDate": null,
        "purchaseTime": null,
        "items": null
    });

    let (status, json) = submit(&app, receipt).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Error in receipt JSON validation");

    let fields = json["fields"].as_object().unwrap();
    let mut names: Vec<&str> = fields.keys().map(String::as_str).collect();
    names.sort();
    assert_eq!(
        names,
        vec!["Items", "PurchaseDate", "PurchaseTime", "Retailer", "Total"]
    );
    assert_eq!(fields["Total"], "Total is required and cannot be empty");
}

#[tokio::test]
async fn test_process_receipt_malformed_json() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        Request::builder()
            .uri("/receipts/process")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"retailer": 42"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
    assert!(json.get("fields").is_none());
}

#[tokio::test]
async fn test_get_points_non_existent_id() {
    let app = create_test_app();

    let (status, json) = points(&app, "invalidID").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Receipt ID not found");
}

#[tokio::test]
async fn test_concurrent_submissions_get_distinct_ids() {
    let app = create_test_app();
    let items = json!([{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}]);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            let receipt = target_receipt("13:01", items.clone());
            tokio::spawn(async move { submit(&app, receipt).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        ids.push(json["id"].as_str().unwrap().to_string());
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);

    for id in &ids {
        let (status, json) = points(&app, id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["points"], 12);
    }
}
