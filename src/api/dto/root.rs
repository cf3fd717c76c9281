/*
 * Responsibility
 * - GET / の response DTO
 */
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello from distributed server demo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub instance: String,
    pub path: String,
    pub message: String,
}

impl RootResponse {
    pub fn new(instance: &str, path: &str) -> Self {
        Self {
            instance: instance.to_string(),
            path: path.to_string(),
            message: GREETING.to_string(),
        }
    }
}
