use crate::core::domain::error::{ProbeResult, ValidationError};
use secrecy::{ExposeSecret, Secret};

/// The password sent in the login payload. Held as a `Secret` so it never
/// shows up in `{:?}` output or tracing fields.
#[derive(Debug, Clone)]
pub struct ProbePassword(Secret<String>);

impl ProbePassword {
    /// Creates a new password after validating it.
    pub fn new(password: impl Into<String>) -> ProbeResult<Self> {
        let password = password.into();
        validate_password(&password)?;
        Ok(Self::new_unchecked(password))
    }

    /// Creates a new password without validation.
    pub(crate) fn new_unchecked(password: String) -> Self {
        Self(Secret::new(password))
    }

    /// Returns the wrapped secret.
    pub fn secret(&self) -> &Secret<String> {
        &self.0
    }

    /// Returns the plaintext password.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Validates a password.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Field {
            field: "password".to_string(),
            message: "Password cannot be empty".to_string(),
        });
    }
    Ok(())
}
