//! Receipt Processor Service
//!
//! REST API for scoring receipts and looking up their points

use anyhow::{Context, Result};
use receipt_processor::{create_router, AppState, Config, ReceiptProcessor, ScoreStore};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_processor=debug,receipt_common=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Receipt Processor Service");

    let config = Config::from_env().context("Failed to load configuration")?;
    let addr = config.api_address();

    let state = AppState::new(ReceiptProcessor::new(ScoreStore::new()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Receipt Processor Service running on http://{}", addr);
    info!("  POST /receipts/process - Score a receipt");
    info!("  GET /receipts/{{id}}/points - Look up points");

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
