use crate::core::domain::error::{ProbeResult, ValidationError};

const ALLOWED_SCHEMES: [&str; 2] = ["https", "http"];
const MAX_URL_LENGTH: usize = 2083; // RFC 7230 practical limit

/// A validated base URL (scheme and host, optionally a path prefix) that
/// endpoint paths are appended to.
///
/// # Examples
///
/// ```
/// use login_probe::BaseUrl;
///
/// let base = BaseUrl::new("https://backend.example.com/").unwrap();
/// assert_eq!(
///     base.join("/api/auth/login"),
///     "https://backend.example.com/api/auth/login"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new base URL after validating it.
    pub fn new(url: impl Into<String>) -> ProbeResult<Self> {
        let url = url.into();
        validate_base_url(&url)?;
        Ok(Self::new_unchecked(url))
    }

    /// Creates a new base URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends an endpoint path, never producing a doubled `/`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Validates a base URL: absolute http(s), with a host, no query or fragment.
pub(crate) fn validate_base_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::Field {
            field: "base_url".to_string(),
            message: "Base URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: {}",
            parsed.scheme(),
            ALLOWED_SCHEMES.join(", ")
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Format("URL must contain a host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::ConstraintViolation(
            "Base URL cannot carry a query string or fragment".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url_valid() {
        assert!(validate_base_url("https://expense-backend.azurewebsites.net").is_ok());
        assert!(validate_base_url("http://127.0.0.1:8080").is_ok());
        assert!(validate_base_url("http://localhost:8080/").is_ok());
        assert!(validate_base_url("https://example.com/prefix").is_ok());
    }

    #[test]
    fn test_validate_base_url_invalid() {
        assert!(validate_base_url("").is_err());
        assert!(validate_base_url("   ").is_err());
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("ftp://example.com").is_err()); // scheme
        assert!(validate_base_url("https://example.com?x=1").is_err()); // query
        assert!(validate_base_url("https://example.com#top").is_err()); // fragment
        assert!(validate_base_url(&format!("https://{}.com", "a".repeat(2100))).is_err());
    }

    #[test]
    fn test_join_handles_slashes() {
        let with_slash = BaseUrl::new_unchecked("http://localhost:8080/".to_string());
        let without_slash = BaseUrl::new_unchecked("http://localhost:8080".to_string());
        assert_eq!(
            with_slash.join("/api/auth/login"),
            "http://localhost:8080/api/auth/login"
        );
        assert_eq!(
            without_slash.join("api/auth/login"),
            "http://localhost:8080/api/auth/login"
        );
    }

    #[test]
    fn test_join_keeps_path_prefix() {
        let base = BaseUrl::new("https://example.com/v1").unwrap();
        assert_eq!(base.join("/api/auth/login"), "https://example.com/v1/api/auth/login");
    }
}
