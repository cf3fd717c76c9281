/*
 * Responsibility
 * - GET / : instance id + request path + greeting
 * - query string は含めない (path のみ)
 */
use axum::{Json, extract::OriginalUri, extract::State};

use crate::{api::dto::root::RootResponse, state::AppState};

pub async fn root(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Json<RootResponse> {
    Json(RootResponse::new(&state.instance_id, uri.path()))
}

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use super::*;
    use crate::api::dto::root::GREETING;

    #[tokio::test]
    async fn echoes_path_and_instance() {
        let state = AppState::new("worker-7");
        let Json(body) = root(State(state), OriginalUri(Uri::from_static("/"))).await;

        assert_eq!(body.instance, "worker-7");
        assert_eq!(body.path, "/");
        assert_eq!(body.message, GREETING);
    }

    #[tokio::test]
    async fn query_string_is_not_part_of_path() {
        let state = AppState::new("worker-7");
        let Json(body) = root(State(state), OriginalUri(Uri::from_static("/?debug=1"))).await;

        assert_eq!(body.path, "/");
    }
}
