use crate::core::domain::error::{ProbeError, ProbeResult};
use reqwest::StatusCode;
use serde_json::Value;

/// Raw result of the login exchange: status code plus the body text as
/// received. Interpretation is deferred to [`LoginResponse::into_outcome`].
#[derive(Debug, Clone)]
pub struct LoginResponse {
    status: StatusCode,
    body: String,
}

/// What the login response means for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Status 200; the body parsed as JSON.
    Success(Value),
    /// Any other status; the body verbatim.
    Failure(String),
}

impl LoginResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Only an exact 200 counts; 201, 204 and friends take the failure branch.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Interprets the response.
    ///
    /// # Errors
    ///
    /// Returns `ProbeError::Decode` if the status is 200 but the body is not JSON.
    pub fn into_outcome(self) -> ProbeResult<LoginOutcome> {
        if !self.is_success() {
            return Ok(LoginOutcome::Failure(self.body));
        }
        serde_json::from_str(&self.body)
            .map(LoginOutcome::Success)
            .map_err(|e| ProbeError::Decode(format!("Failed to parse login response: {}", e)))
    }
}
