//! Response bodies for the Receipt Processor API

use receipt_common::FieldErrors;
use serde::{Deserialize, Serialize};

/// Response from a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    /// ID to query points with
    pub id: String,
}

/// Points awarded to a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Error body; `fields` is present for receipt validation failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}
