//! API request handlers for the Receipt Processor

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use receipt_common::{FieldErrors, ReceiptWire};
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    models::{ErrorResponse, PointsResponse, ProcessReceiptResponse},
    processor::ReceiptProcessor,
};

pub const VALIDATION_ERROR: &str = "Error in receipt JSON validation";
pub const RECEIPT_NOT_FOUND: &str = "Receipt ID not found";

/// Shared application state
#[derive(Debug, Default)]
pub struct AppState {
    pub processor: ReceiptProcessor,
}

impl AppState {
    pub fn new(processor: ReceiptProcessor) -> Self {
        Self { processor }
    }
}

/// API Error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fields: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
            fields: self.fields,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<receipt_common::Error> for ApiError {
    fn from(err: receipt_common::Error) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: VALIDATION_ERROR.to_string(),
            fields: Some(err.field_errors()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected receipt body: {}", rejection.body_text());
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let receipts = state.processor.receipt_count().await;

    Json(serde_json::json!({
        "status": "healthy",
        "service": "receipt-processor",
        "receipts": receipts
    }))
}

/// Score a receipt and return its ID
pub async fn process_receipt_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReceiptWire>, JsonRejection>,
) -> Result<Json<ProcessReceiptResponse>, ApiError> {
    let Json(receipt) = payload?;
    info!("Processing receipt from retailer: {}", receipt.retailer);

    let id = state.processor.process(&receipt).await?;

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Get the points awarded to a receipt
pub async fn get_points_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    match state.processor.points(&id).await {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => Err(ApiError::new(StatusCode::NOT_FOUND, RECEIPT_NOT_FOUND)),
    }
}
