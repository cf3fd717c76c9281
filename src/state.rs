/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - instance_id: resolved once at startup, read-only afterwards
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub instance_id: Arc<str>,
}

impl AppState {
    pub fn new(instance_id: impl Into<Arc<str>>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.instance_id.as_str())
    }
}
