//! Login form submission.
//!
//! There is no real identity backend: the bundled [`SimulatedAuthenticator`]
//! waits a fixed delay and accepts any non-empty credentials. The service owns
//! the loading flag the login view renders and allows only one submission in
//! flight at a time.

use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::backend::domain::models::errors::{
    LoginError, SubmissionError, TimeoutError, ValidationError,
};
use crate::backend::domain::models::login::{Credentials, LoginOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub simulated_delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 2000,
            timeout_ms: 10_000,
        }
    }
}

/// Collaborator that verifies credentials and issues a session id
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<String, SubmissionError>;
}

/// Stand-in for a real identity provider
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, _credentials: &Credentials) -> Result<String, SubmissionError> {
        tokio::time::sleep(self.delay).await;
        Ok(Uuid::new_v4().to_string())
    }
}

/// Clears the loading flag when dropped, including on cancellation
struct PendingGuard {
    pending: Arc<AtomicBool>,
}

impl PendingGuard {
    fn acquire(pending: &Arc<AtomicBool>) -> Result<Self, SubmissionError> {
        pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmissionError::AlreadyPending)?;
        Ok(Self {
            pending: Arc::clone(pending),
        })
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
    }
}

#[derive(Clone)]
pub struct LoginService {
    authenticator: Arc<dyn Authenticator>,
    timeout: Duration,
    pending: Arc<AtomicBool>,
}

impl LoginService {
    pub fn new(authenticator: Arc<dyn Authenticator>, timeout: Duration) -> Self {
        Self {
            authenticator,
            timeout,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn from_config(config: LoginConfig) -> Self {
        let authenticator = SimulatedAuthenticator::new(Duration::from_millis(config.simulated_delay_ms));
        Self::new(Arc::new(authenticator), Duration::from_millis(config.timeout_ms))
    }

    /// True while a submission is waiting on the authenticator
    pub fn is_loading(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub async fn submit(&self, account: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        let credentials = Self::validate(account, password)?;
        let _guard = PendingGuard::acquire(&self.pending).inspect_err(|_| {
            warn!("Rejected login for '{}': a submission is already pending", credentials.account);
        })?;

        info!(
            "Login attempt: account '{}' (password length: {})",
            credentials.account,
            credentials.password.len()
        );

        let session_id = tokio::time::timeout(self.timeout, self.authenticator.authenticate(&credentials))
            .await
            .map_err(|_| {
                warn!("Login for '{}' timed out after {:?}", credentials.account, self.timeout);
                TimeoutError(self.timeout)
            })??;

        info!("Login succeeded for '{}'", credentials.account);
        Ok(LoginOutcome {
            message: format!("Welcome, {}!", credentials.account),
            account: credentials.account,
            session_id,
        })
    }

    /// Only missing values are rejected; whitespace is a legal value and
    /// both fields are passed on exactly as typed
    fn validate(account: &str, password: &str) -> Result<Credentials, ValidationError> {
        if account.is_empty() {
            return Err(ValidationError::EmptyAccount);
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(Credentials {
            account: account.to_string(),
            password: password.to_string(),
        })
    }
}
