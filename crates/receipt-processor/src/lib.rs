//! Receipt Processor Service
//!
//! Scores submitted receipts against the reward-points rules and serves the
//! awarded points back by receipt ID. Scores are kept in memory only.
//!
//! ## Endpoints
//!
//! - `POST /receipts/process` - Score a receipt, returns `{"id": ...}`
//! - `GET /receipts/{id}/points` - Points for a processed receipt
//! - `GET /health` - Health check

pub mod config;
pub mod handlers;
pub mod models;
pub mod processor;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use models::{ErrorResponse, PointsResponse, ProcessReceiptResponse};
pub use processor::ReceiptProcessor;
pub use storage::ScoreStore;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/receipts/process", post(handlers::process_receipt_handler))
        .route("/receipts/{id}/points", get(handlers::get_points_handler))
        .with_state(shared_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
