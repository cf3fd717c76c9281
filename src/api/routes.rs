/*
 * Responsibility
 * - URL 構造 (route table) を定義
 * - (GET, "/") -> root, (GET, "/health") -> health
 * - それ以外 (unknown path / method) は axum の既定 404 / 405
 */
use axum::{Router, routing::get};

use crate::{
    api::handlers::{health::health, root::root},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
