use crate::core::domain::error::{ProbeResult, ValidationError};

/// The username sent in the login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeUsername(String);

impl ProbeUsername {
    /// Creates a new username after validating it.
    pub fn new(username: impl Into<String>) -> ProbeResult<Self> {
        let username = username.into();
        validate_username(&username)?;
        Ok(Self::new_unchecked(username))
    }

    /// Creates a new username without validation.
    pub(crate) fn new_unchecked(username: String) -> Self {
        Self(username)
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the object and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Validates a username. The backend owns the real rules, so only blank
/// values are rejected here.
pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "username".to_string(),
            message: "Username cannot be empty".to_string(),
        });
    }
    Ok(())
}
