use axum::http::StatusCode;
use shared::LoginResponse;

use crate::backend::domain::models::errors::{LoginError, SubmissionError};
use crate::backend::domain::models::login::LoginOutcome;

pub struct LoginMapper;

impl LoginMapper {
    pub fn outcome_to_dto(outcome: LoginOutcome) -> LoginResponse {
        LoginResponse {
            success: true,
            message: outcome.message,
            session_id: Some(outcome.session_id),
        }
    }

    pub fn error_to_dto(error: &LoginError) -> LoginResponse {
        LoginResponse {
            success: false,
            message: error.to_string(),
            session_id: None,
        }
    }

    /// HTTP status for a failed submission
    pub fn status_for(error: &LoginError) -> StatusCode {
        match error {
            LoginError::Validation(_) => StatusCode::BAD_REQUEST,
            LoginError::Submission(SubmissionError::AlreadyPending) => StatusCode::CONFLICT,
            LoginError::Submission(SubmissionError::Rejected(_)) => StatusCode::UNAUTHORIZED,
            LoginError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::errors::{TimeoutError, ValidationError};
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            LoginMapper::status_for(&ValidationError::EmptyAccount.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LoginMapper::status_for(&SubmissionError::AlreadyPending.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            LoginMapper::status_for(&SubmissionError::Rejected("no".to_string()).into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            LoginMapper::status_for(&TimeoutError(Duration::from_secs(10)).into()),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_error_to_dto() {
        let dto = LoginMapper::error_to_dto(&ValidationError::EmptyPassword.into());
        assert!(!dto.success);
        assert_eq!(dto.message, "Password cannot be empty");
        assert!(dto.session_id.is_none());
    }
}
