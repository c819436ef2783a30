use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{info, warn};

use crate::backend::io::rest::mappers::LoginMapper;
use crate::backend::AppState;
use shared::{LoginRequest, LoginStatusResponse};

/// Create a router for login APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/status", get(login_status))
}

/// Submit credentials. Responds once the authenticator finishes.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    info!("POST /api/auth/login - account: {}", request.account);

    match state
        .login_service
        .submit(&request.account, &request.password)
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(LoginMapper::outcome_to_dto(outcome))).into_response(),
        Err(e) => {
            warn!("Login failed: {}", e);
            (LoginMapper::status_for(&e), Json(LoginMapper::error_to_dto(&e))).into_response()
        }
    }
}

async fn login_status(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/auth/status");

    let response = LoginStatusResponse {
        is_loading: state.login_service.is_loading(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::{test_config, test_router};
    use crate::backend::{create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use shared::LoginResponse;
    use std::time::Duration;
    use tower::ServiceExt;

    fn login_request(account: &str, password: &str) -> Result<Request<Body>, Box<dyn std::error::Error>> {
        let body = LoginRequest {
            account: account.to_string(),
            password: password.to_string(),
        };
        Ok(Request::builder()
            .uri("/api/auth/login")
            .method(Method::POST)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?)
    }

    fn status_request() -> Result<Request<Body>, Box<dyn std::error::Error>> {
        Ok(Request::builder()
            .uri("/api/auth/status")
            .method(Method::GET)
            .body(Body::empty())?)
    }

    #[tokio::test]
    async fn test_login_success() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_router().await?;

        let response = app.oneshot(login_request("joshua.salty", "secret")?).await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let login: LoginResponse = serde_json::from_slice(&body)?;
        assert!(login.success);
        assert_eq!(login.message, "Welcome, joshua.salty!");
        assert!(login.session_id.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_login_empty_account() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_router().await?;

        let response = app.oneshot(login_request("", "secret")?).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let login: LoginResponse = serde_json::from_slice(&body)?;
        assert!(!login.success);
        assert!(login.session_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_login_whitespace_password() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_router().await?;

        let response = app.oneshot(login_request("alice", "   ")?).await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let login: LoginResponse = serde_json::from_slice(&body)?;
        assert!(login.success);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_submit_conflict() -> Result<(), Box<dyn std::error::Error>> {
        let mut config = test_config();
        config.login.simulated_delay_ms = 2000;
        let app = create_router(initialize_backend(&config).await?, &config.server)?;

        let first = tokio::spawn(app.clone().oneshot(login_request("alice", "pw")?));
        tokio::task::yield_now().await;

        let response = app.clone().oneshot(status_request()?).await?;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let status: LoginStatusResponse = serde_json::from_slice(&body)?;
        assert!(status.is_loading);

        let second = app.clone().oneshot(login_request("alice", "pw")?).await?;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let first = first.await??;
        assert_eq!(first.status(), StatusCode::OK);

        let response = app.oneshot(status_request()?).await?;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let status: LoginStatusResponse = serde_json::from_slice(&body)?;
        assert!(!status.is_loading);

        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_timeout() -> Result<(), Box<dyn std::error::Error>> {
        let mut config = test_config();
        config.login.simulated_delay_ms = 30_000;
        config.login.timeout_ms = 10_000;
        let app = create_router(initialize_backend(&config).await?, &config.server)?;

        let started = tokio::time::Instant::now();
        let response = app.oneshot(login_request("alice", "pw")?).await?;

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(10));
        assert!(elapsed < Duration::from_secs(30));

        Ok(())
    }
}
