use crate::{
    auth::application::{
        request::login_request::LoginRequest, response::login_response::LoginResponse,
    },
    core::domain::{
        error::{ProbeError, ProbeResult},
        model::probe_connection::ProbeConnection,
    },
};

use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};

/// Sends the login request and captures the raw response.
#[derive(Debug, Clone)]
pub struct LoginService {
    http_client: Client,
    default_headers: HeaderMap,
}

impl LoginService {
    /// # Errors
    /// Returns `ProbeError::Connection` if the HTTP client cannot be built.
    pub fn new() -> ProbeResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| ProbeError::Connection(e.to_string()))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            http_client,
            default_headers,
        })
    }

    /// Posts the credentials to the login endpoint.
    ///
    /// Any HTTP status is a valid result here; only transport failures are errors.
    #[tracing::instrument(name = "login", skip_all, fields(url = tracing::field::Empty))]
    pub async fn execute(&self, connection: &ProbeConnection) -> ProbeResult<LoginResponse> {
        let url = connection.login_url();
        tracing::Span::current().record("url", url.as_str());

        let request = LoginRequest::from(connection);
        tracing::debug!("sending login request");
        let response = self.send_request(&url, &request).await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::Connection(format!("Failed to read response body: {}", e)))?;
        tracing::info!(status = status.as_u16(), bytes = body.len(), "login response received");

        Ok(LoginResponse::new(status, body))
    }

    async fn send_request(
        &self,
        url: &str,
        request: &LoginRequest,
    ) -> ProbeResult<reqwest::Response> {
        self.http_client
            .post(url)
            .headers(self.default_headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ProbeError::Connection(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::value_object::{BaseUrl, ProbePassword, ProbeUsername};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    fn create_test_connection(server_url: &str) -> ProbeConnection {
        ProbeConnection::new(
            BaseUrl::new_unchecked(server_url.to_string()),
            ProbeUsername::new_unchecked("testuser".to_string()),
            ProbePassword::new_unchecked("testpass".to_string()),
        )
    }

    #[tokio::test]
    async fn test_execute_captures_status_and_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "username": "testuser",
                "password": "testpass"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "t0k"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = LoginService::new().unwrap();
        let response = service
            .execute(&create_test_connection(&mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert!(response.is_success());
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(
            requests[0]
                .headers
                .get("accept")
                .and_then(|v| v.to_str().ok()),
            Some("*/*")
        );
        let body: serde_json::Value = serde_json::from_str(response.body()).unwrap();
        assert_eq!(body["token"], "t0k");
    }

    #[tokio::test]
    async fn test_execute_returns_error_statuses_as_responses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let service = LoginService::new().unwrap();
        let response = service
            .execute(&create_test_connection(&mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status(), 503);
        assert_eq!(response.body(), "maintenance");
    }

    #[tokio::test]
    async fn test_execute_trailing_slash_base_url() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;

        let service = LoginService::new().unwrap();
        let connection = create_test_connection(&format!("{}/", mock_server.uri()));
        let response = service.execute(&connection).await.unwrap();

        assert_eq!(response.status(), 401);
        assert_eq!(response.body(), "");
    }
}
