//! # Backend Module
//!
//! Contains all non-presentation logic for the meeting room booking server.
//!
//! The backend is layered the same way top to bottom:
//! ```text
//! IO Layer (REST API, HTML views)
//!     ↓
//! Domain Layer (calendar grid, schedule layout, floors, login)
//!     ↓
//! Storage Layer (schedule blocks)
//! ```
//!
//! This module builds the application state from [`AppConfig`] and wires the
//! router with CORS, the `/api` routes, the views and the health check.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::backend::domain::{
    CalendarService, Clock, FixedClock, FloorService, LoginService, ScheduleService, SystemClock,
};
use crate::backend::storage::InMemoryScheduleRepository;
use crate::config::{AppConfig, ServerConfig};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub calendar_service: CalendarService,
    pub schedule_service: ScheduleService,
    pub floor_service: FloorService,
    pub login_service: LoginService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up schedule storage");
    let storage = InMemoryScheduleRepository::new(config.schedule.blocks.clone());

    info!("Setting up domain model");
    let clock: Arc<dyn Clock> = match config.calendar.today {
        Some(today) => {
            info!("Clock pinned to {}", today);
            Arc::new(FixedClock(today))
        }
        None => Arc::new(SystemClock),
    };
    let calendar_service = CalendarService::new(clock, config.calendar.selected_date);
    let schedule_service =
        ScheduleService::new(Arc::new(storage), config.schedule.axis.clone()).await?;
    let floor_service = FloorService::new(config.floors.clone());
    let login_service = LoginService::from_config(config.login);

    info!("Setting up application state");
    Ok(AppState {
        calendar_service,
        schedule_service,
        floor_service,
        login_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, server: &ServerConfig) -> Result<Router> {
    let origin = server
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", server.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/calendar", io::rest::calendar_apis::router())
        .nest("/schedule", io::rest::schedule_apis::router())
        .nest("/floors", io::rest::floor_apis::router())
        .nest("/auth", io::rest::auth_apis::router());

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(io::rest::health_apis::health))
        .merge(io::views::router());

    if let Some(dir) = &server.assets_dir {
        info!("Serving static assets from {}", dir.display());
        router = router.nest_service("/assets", ServeDir::new(dir));
    }

    Ok(router.layer(cors).with_state(app_state))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::io::Write;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_router().await?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let health: shared::HealthResponse = serde_json::from_slice(&body)?;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "meeting-room-server");
        Ok(())
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_router().await?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/floors")
                    .method(Method::GET)
                    .header("Origin", "http://localhost:8080")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(
            response.headers().get("access-control-allow-origin"),
            Some(&HeaderValue::from_static("http://localhost:8080"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_cors_origin() -> Result<(), Box<dyn std::error::Error>> {
        let config = test_config();
        let app_state = initialize_backend(&config).await?;
        let server = ServerConfig {
            cors_origin: "bad\norigin".to_string(),
            ..ServerConfig::default()
        };

        assert!(create_router(app_state, &server).is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_unplaceable_seed_block() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            r#"
schedule:
  day_start: "07:00:00"
  day_end: "19:15:00"
  blocks:
    - date: 2025-08-08
      title: Evening all-hands
      room: Ruby
      start: "18:30:00"
      end: "19:30:00"
"#
        )?;

        let config = AppConfig::from_file(file.path())?;
        let error = match initialize_backend(&config).await {
            Ok(_) => return Err("misaligned axis was accepted".into()),
            Err(e) => e,
        };
        assert!(format!("{:#}", error).contains("19:15"));

        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            r#"
schedule:
  blocks:
    - date: 2025-08-08
      title: Evening all-hands
      start: "18:30:00"
      end: "19:30:00"
"#
        )?;

        let config = AppConfig::from_file(file.path())?;
        let error = match initialize_backend(&config).await {
            Ok(_) => return Err("block outside the axis was accepted".into()),
            Err(e) => e,
        };
        assert!(format!("{:#}", error).contains("Evening all-hands"));
        Ok(())
    }

    #[tokio::test]
    async fn test_assets_are_served() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("site.css"), "body { margin: 0; }")?;

        let config = test_config();
        let app_state = initialize_backend(&config).await?;
        let server = ServerConfig {
            assets_dir: Some(dir.path().to_path_buf()),
            ..ServerConfig::default()
        };
        let app = create_router(app_state, &server)?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/assets/site.css")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"body { margin: 0; }");
        Ok(())
    }
}
