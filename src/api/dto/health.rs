//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with integration status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub bot: String,
    pub checks: HealthChecks,
}

/// Status of each outbound integration.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub tracking: CheckStatus,
    pub metrika: CheckStatus,
    pub gtag: CheckStatus,
}

/// Individual integration status: `enabled` or `disabled`.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn enabled(message: impl Into<String>) -> Self {
        Self {
            status: "enabled".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            status: "disabled".to_string(),
            message: None,
        }
    }
}
