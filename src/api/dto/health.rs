//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
    pub checks: HealthChecks,
}

/// Health status for each storage component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub drivers: CheckStatus,
    pub notifications: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    pub fn from_probe(healthy: bool, component: &str) -> Self {
        if healthy {
            CheckStatus {
                status: "ok".to_string(),
                message: None,
            }
        } else {
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("{component} storage is unreachable")),
            }
        }
    }
}
