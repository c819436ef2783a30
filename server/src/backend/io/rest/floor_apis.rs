use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{info, warn};

use crate::backend::io::rest::error_response;
use crate::backend::io::rest::mappers::FloorMapper;
use crate::backend::AppState;
use shared::SelectFloorRequest;

/// Create a router for floor selection APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_floors))
        .route("/select", post(select_floor))
}

async fn list_floors(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/floors");

    let selection = state.floor_service.list_floors();
    (StatusCode::OK, Json(FloorMapper::selection_to_dto(selection))).into_response()
}

async fn select_floor(
    State(state): State<AppState>,
    Json(request): Json<SelectFloorRequest>,
) -> impl IntoResponse {
    info!("POST /api/floors/select - floor: {}", request.floor_id);

    match state.floor_service.select_floor(&request.floor_id) {
        Ok(selection) => {
            (StatusCode::OK, Json(FloorMapper::selection_to_dto(selection))).into_response()
        }
        Err(e) => {
            warn!("Failed to select floor: {}", e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}
