/*
 * Responsibility
 * - GET /health の response DTO
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub instance: String,
}

impl HealthResponse {
    pub fn ok(instance: &str) -> Self {
        Self {
            status: "ok".to_string(),
            instance: instance.to_string(),
        }
    }
}
