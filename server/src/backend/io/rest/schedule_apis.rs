use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{error, info, warn};

use crate::backend::io::rest::error_response;
use crate::backend::io::rest::mappers::ScheduleMapper;
use crate::backend::AppState;
use shared::{ScheduleDayQuery, ScheduleLayoutRequest};

/// Create a router for the day schedule APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slots", get(get_time_slots))
        .route("/day", get(get_day_schedule))
        .route("/dates", get(get_scheduled_dates))
        .route("/layout", post(layout_blocks))
}

/// Get the configured time axis
async fn get_time_slots(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/schedule/slots");

    let service = &state.schedule_service;
    let response = ScheduleMapper::slots_to_dto(service.slots(), service.slot_minutes());
    (StatusCode::OK, Json(response)).into_response()
}

/// Lay out the stored blocks of a day, the selected date when none is given
async fn get_day_schedule(
    State(state): State<AppState>,
    Query(query): Query<ScheduleDayQuery>,
) -> impl IntoResponse {
    info!("GET /api/schedule/day - query: {:?}", query);

    let date = query
        .date
        .unwrap_or_else(|| state.calendar_service.get_selected_date());

    match state.schedule_service.day_layout(date).await {
        Ok(layout) => {
            let response = ScheduleMapper::layout_to_dto(layout, Some(date));
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to lay out schedule for {}: {:#}", date, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error laying out schedule")
        }
    }
}

/// List the days that have bookings
async fn get_scheduled_dates(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/schedule/dates");

    match state.schedule_service.scheduled_dates().await {
        Ok(dates) => (StatusCode::OK, Json(dates)).into_response(),
        Err(e) => {
            error!("Failed to list scheduled dates: {:#}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error listing scheduled dates")
        }
    }
}

/// Lay out caller-supplied blocks over the configured axis
async fn layout_blocks(
    State(state): State<AppState>,
    Json(request): Json<ScheduleLayoutRequest>,
) -> impl IntoResponse {
    info!("POST /api/schedule/layout - {} blocks", request.blocks.len());

    let blocks = ScheduleMapper::blocks_to_domain(request.blocks);
    match state.schedule_service.layout(&blocks) {
        Ok(layout) => {
            let response = ScheduleMapper::layout_to_dto(layout, None);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Rejected schedule layout: {}", e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}
