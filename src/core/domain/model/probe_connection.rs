use crate::core::domain::value_object::{BaseUrl, ProbePassword, ProbeUsername};

/// Path of the login endpoint, relative to the base URL.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Everything needed to reach and authenticate against the backend.
#[derive(Debug, Clone)]
pub struct ProbeConnection {
    base_url: BaseUrl,
    username: ProbeUsername,
    password: ProbePassword,
}

impl ProbeConnection {
    pub fn new(base_url: BaseUrl, username: ProbeUsername, password: ProbePassword) -> Self {
        Self {
            base_url,
            username,
            password,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn username(&self) -> &ProbeUsername {
        &self.username
    }

    pub fn password(&self) -> &ProbePassword {
        &self.password
    }

    /// Full URL of the login endpoint.
    pub fn login_url(&self) -> String {
        self.base_url.join(LOGIN_PATH)
    }
}
