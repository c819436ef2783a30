/// Credentials as typed into the login form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account: String,
    pub password: String,
}

/// Successful result of a login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub account: String,
    pub session_id: String,
    pub message: String,
}
