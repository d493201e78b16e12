//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response body of `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// Number of currently registered connections
    pub connected: usize,
}

impl HealthDto {
    pub fn ok(connected: usize) -> Self {
        Self {
            status: "ok".to_string(),
            connected,
        }
    }
}
