mod auth;
mod core;

#[cfg(test)]
mod tests;

pub use crate::auth::application::response::login_response::{LoginOutcome, LoginResponse};
pub use crate::core::domain::error::{ProbeError, ProbeResult, ValidationError};
pub use crate::core::domain::model::probe_connection::{LOGIN_PATH, ProbeConnection};
pub use crate::core::domain::value_object::{BaseUrl, ProbePassword, ProbeUsername};
pub use crate::core::infrastructure::telemetry;
pub use crate::core::infrastructure::transcript::{
    FAILURE_MARKER, HEADER, SUCCESS_MARKER, Transcript,
};

use crate::auth::application::service::login_service::LoginService;
use std::io::Write;

/// Backend the probe targets when no other base URL is given.
pub const DEFAULT_BASE_URL: &str = "https://expense-backend-1766329096.azurewebsites.net";
/// Demo account username.
pub const DEFAULT_USERNAME: &str = "john_doe";
/// Demo account password.
pub const DEFAULT_PASSWORD: &str = "john123";

/// A one-shot login probe.
///
/// Sends a single `POST /api/auth/login` and reports the outcome. There is
/// no session kept and nothing is retried.
///
/// # Examples
///
/// ```no_run
/// use login_probe::{LoginProbe, ProbeResult};
///
/// #[tokio::main]
/// async fn main() -> ProbeResult<()> {
///     let probe = LoginProbe::builder()
///         .base_url("http://localhost:8080")
///         .credentials("john_doe", "john123")
///         .build()?;
///
///     probe.run(std::io::stdout()).await?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LoginProbe {
    connection: ProbeConnection,
    service: LoginService,
}

/// Builder for LoginProbe configuration. Unset fields fall back to the
/// `DEFAULT_*` constants.
#[derive(Debug, Default)]
pub struct LoginProbeBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<String>,
}

impl LoginProbeBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// # Errors
    /// Returns `ProbeError::Validation` for a malformed base URL or blank
    /// credentials, and `ProbeError::Connection` if the HTTP client cannot
    /// be built.
    pub fn build(self) -> ProbeResult<LoginProbe> {
        let base_url =
            BaseUrl::new(self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))?;
        let username =
            ProbeUsername::new(self.username.unwrap_or_else(|| DEFAULT_USERNAME.to_string()))?;
        let password =
            ProbePassword::new(self.password.unwrap_or_else(|| DEFAULT_PASSWORD.to_string()))?;

        Ok(LoginProbe {
            connection: ProbeConnection::new(base_url, username, password),
            service: LoginService::new()?,
        })
    }
}

impl LoginProbe {
    /// Creates a new builder for LoginProbe configuration
    pub fn builder() -> LoginProbeBuilder {
        LoginProbeBuilder::default()
    }

    /// The connection details this probe will use.
    pub fn connection(&self) -> &ProbeConnection {
        &self.connection
    }

    /// Sends the login request without printing anything.
    ///
    /// # Errors
    /// Returns `ProbeError::Connection` if the endpoint cannot be reached.
    /// Non-200 statuses are not errors.
    pub async fn login(&self) -> ProbeResult<LoginResponse> {
        self.service.execute(&self.connection).await
    }

    /// Runs the probe and writes the transcript to `out`.
    ///
    /// The header is written before the request goes out; the status line
    /// and the success/failure block only once a response arrived.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The endpoint is unreachable (nothing past the header is written)
    /// - The status is 200 but the body is not JSON (written up to the status line)
    /// - Writing to `out` fails
    pub async fn run<W: Write>(&self, out: W) -> ProbeResult<LoginOutcome> {
        let mut transcript = Transcript::new(out);
        transcript.header()?;

        let response = self.login().await?;
        transcript.status(response.status())?;

        let outcome = response.into_outcome()?;
        transcript.outcome(&outcome)?;
        Ok(outcome)
    }
}
