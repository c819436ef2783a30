use axum::response::Json;
use shared::HealthResponse;

pub const SERVICE_NAME: &str = "meeting-room-server";

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}
