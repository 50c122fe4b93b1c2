//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode};
use devhub_service::dto::{HealthResponse, ReadinessResponse};

use crate::response::ApiResponse;
use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> ApiResponse<HealthResponse> {
    ApiResponse::ok("OK", HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, ApiResponse<ReadinessResponse>) {
    let db_healthy = state.pool().acquire().await.is_ok();
    let redis_healthy = state
        .service_context()
        .redis_pool()
        .health_check()
        .await
        .is_ok();

    let response = ReadinessResponse::ready(db_healthy, redis_healthy);
    if response.is_ready() {
        (StatusCode::OK, ApiResponse::ok("Ready", response))
    } else {
        let body = ApiResponse {
            success: false,
            message: "Dependencies unavailable".to_string(),
            data: Some(response),
        };
        (StatusCode::SERVICE_UNAVAILABLE, body)
    }
}
