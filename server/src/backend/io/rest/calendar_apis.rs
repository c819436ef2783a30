use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{error, info, warn};

use crate::backend::domain::models::month::HighlightDates;
use crate::backend::domain::{generate_month_grid, MonthGrid};
use crate::backend::io::rest::error_response;
use crate::backend::io::rest::mappers::CalendarMapper;
use crate::backend::AppState;
use shared::{
    CalendarFocusDate, CalendarGridRequest, CalendarMonthRequest, SelectedDateDto,
    UpdateCalendarFocusRequest, UpdateCalendarFocusResponse,
};

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_month))
        .route("/grid", post(generate_grid))
        .route("/current-date", get(get_current_date))
        .route("/focus-date", get(get_focus_date).post(set_focus_date))
        .route("/focus-date/previous", post(navigate_previous_month))
        .route("/focus-date/next", post(navigate_next_month))
        .route("/selected-date", get(get_selected_date).post(set_selected_date))
}

/// Get the grid of a real month highlighted with the selected date and today
async fn get_calendar_month(
    State(state): State<AppState>,
    Query(query): Query<CalendarMonthRequest>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - query: {:?}", query);

    match state
        .calendar_service
        .generate_calendar_month(query.month, query.year)
    {
        Ok(grid) => (StatusCode::OK, Json(CalendarMapper::grid_to_dto(grid))).into_response(),
        Err(e) => {
            warn!("Rejected calendar month request: {}", e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}

/// Generate a grid from a caller-supplied month descriptor
async fn generate_grid(
    State(state): State<AppState>,
    Json(request): Json<CalendarGridRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/grid - month: {}", request.month.name);

    let descriptor = CalendarMapper::descriptor_to_domain(request.month);
    let highlights = HighlightDates {
        selected: request.selected_date,
        today: request.today,
    };

    match generate_month_grid(&descriptor, highlights) {
        Ok(weeks) => {
            let grid = MonthGrid {
                month: descriptor,
                weeks,
                highlights,
            };
            (StatusCode::OK, Json(CalendarMapper::grid_to_dto(grid))).into_response()
        }
        Err(e) => {
            warn!("Rejected month descriptor '{}': {}", descriptor.name, e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}

/// Get current date information from the backend
async fn get_current_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-date");

    let current_date = state.calendar_service.get_current_date();
    (StatusCode::OK, Json(current_date)).into_response()
}

/// Get the current focus date for calendar navigation
async fn get_focus_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/focus-date");

    let focus_date = state.calendar_service.get_focus_date();
    (StatusCode::OK, Json(focus_date)).into_response()
}

/// Set the focus date for calendar navigation
async fn set_focus_date(
    State(state): State<AppState>,
    Json(request): Json<UpdateCalendarFocusRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date - request: {:?}", request);

    match state.calendar_service.set_focus_date(request.month, request.year) {
        Ok(focus_date) => {
            let response = UpdateCalendarFocusResponse {
                focus_date,
                success_message: format!(
                    "Calendar focus set to {} {}",
                    state.calendar_service.month_name(request.month),
                    request.year
                ),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to set focus date: {}", e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}

/// Navigate to the previous month
async fn navigate_previous_month(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/previous");

    match state.calendar_service.navigate_previous_month() {
        Ok(focus_date) => navigated(&state, focus_date),
        Err(e) => {
            warn!("Cannot navigate to the previous month: {}", e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}

/// Navigate to the next month
async fn navigate_next_month(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/next");

    match state.calendar_service.navigate_next_month() {
        Ok(focus_date) => navigated(&state, focus_date),
        Err(e) => {
            warn!("Cannot navigate to the next month: {}", e);
            error_response(StatusCode::BAD_REQUEST, e)
        }
    }
}

fn navigated(state: &AppState, focus_date: CalendarFocusDate) -> Response {
    let response = UpdateCalendarFocusResponse {
        success_message: format!(
            "Navigated to {} {}",
            state.calendar_service.month_name(focus_date.month),
            focus_date.year
        ),
        focus_date,
    };
    (StatusCode::OK, Json(response)).into_response()
}

async fn get_selected_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/selected-date");

    let date = state.calendar_service.get_selected_date();
    (StatusCode::OK, Json(SelectedDateDto { date })).into_response()
}

/// Select a date; its month becomes the focus month
async fn set_selected_date(
    State(state): State<AppState>,
    Json(request): Json<SelectedDateDto>,
) -> impl IntoResponse {
    info!("POST /api/calendar/selected-date - date: {}", request.date);

    let date = state.calendar_service.set_selected_date(request.date);
    (StatusCode::OK, Json(SelectedDateDto { date })).into_response()
}
