//! HTTP routes.
//!
//! ```text
//! POST /receipts/process       RawSubmission JSON  → {"id": "..."}
//! GET  /receipts/{id}/points                       → {"points": n}
//! GET  /health                                     → "OK"
//! ```

use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tally_core::{Points, RawSubmission};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let timeout = state.config.request_timeout();

    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .layer(request_deadline(timeout))
        .with_state(state)
}

/// Answers `408 Request Timeout` once a request has run for `timeout`.
fn request_deadline(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

#[instrument(skip_all)]
async fn process_receipt(
    State(state): State<AppState>,
    Json(raw): Json<RawSubmission>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let cancel = state.shutdown.child_token();
    let id = state.receipts.process_submission(&raw, &cancel)?;
    Ok(Json(ProcessResponse { id }))
}

#[instrument(skip(state))]
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = state.receipts.get_score(&id)?;
    Ok(Json(PointsResponse { points }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let app: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .layer(request_deadline(Duration::from_millis(20)));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
