//! # REST API Interface Layer
//!
//! JSON endpoints grouped by area. Each area exposes a `router()` that
//! [`create_router`](crate::backend::create_router) nests under `/api`.
//! Failures are answered with a [`shared::ErrorResponse`] body.

pub mod auth_apis;
pub mod calendar_apis;
pub mod floor_apis;
pub mod health_apis;
pub mod mappers;
pub mod schedule_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;

/// Build an error response with a JSON `{ "error": ... }` body
pub fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (status, Json(ErrorResponse::new(error.to_string()))).into_response()
}
