use crate::core::domain::model::probe_connection::ProbeConnection;
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

/// JSON body of `POST /api/auth/login`.
///
/// The password stays wrapped until serialization, so `{:?}` never prints it.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    #[serde(serialize_with = "serialize_exposed")]
    pub password: Secret<String>,
}

fn serialize_exposed<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

impl From<&ProbeConnection> for LoginRequest {
    fn from(connection: &ProbeConnection) -> Self {
        Self {
            username: connection.username().as_str().to_string(),
            password: connection.password().secret().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_request() -> LoginRequest {
        LoginRequest {
            username: "john_doe".to_string(),
            password: Secret::new("john123".to_string()),
        }
    }

    #[test]
    fn test_serializes_username_then_password() {
        assert_eq!(
            serde_json::to_string(&create_test_request()).unwrap(),
            r#"{"username":"john_doe","password":"john123"}"#
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let debug = format!("{:?}", create_test_request());
        assert!(debug.contains("john_doe"));
        assert!(!debug.contains("john123"));
    }
}
