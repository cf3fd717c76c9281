/*
 * Responsibility
 * - GET /health (疎通用, LB / orchestrator の liveness probe)
 * - 常に status=ok を返す
 */
use axum::{Json, extract::State};

use crate::{api::dto::health::HealthResponse, state::AppState};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(&state.instance_id))
}
