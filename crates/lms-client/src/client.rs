//! Core HTTP transport with uniform error mapping

use lms_core::config::ApiConfig;
use lms_core::types::ApiEnvelope;
use lms_core::{Error, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Fallback message for a 401 whose body carries no message of its own
const UNAUTHORIZED_FALLBACK: &str = "Unauthorized: Invalid credentials";

/// Fallback message for non-2xx responses without a usable body
const GENERIC_FALLBACK: &str = "Something went wrong. Please try again later.";

/// API client for making HTTP requests to the LMS backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new API client with the default 10 second timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
            timeout: Duration::from_secs(10),
        }
    }

    /// Create a client from the loaded configuration
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Override the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured backend base URL (without the `/api/v1` prefix)
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for an `/api/v1`-relative path, attaching the bearer
    /// token when one is supplied.
    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}/api/v1{path}", self.base_url);
        let mut request = self.http.request(method, url).timeout(self.timeout);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request, mapping transport failures onto the error taxonomy.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|err| {
            if err.is_timeout() {
                warn!("request timed out after {:?}", self.timeout);
                Error::Timeout {
                    duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                }
            } else {
                warn!("transport failure: {err}");
                Error::Network(err.to_string())
            }
        })
    }

    /// Send a request and unwrap the standard `{success, data}` envelope.
    ///
    /// Non-2xx statuses, `success: false` bodies, and missing `data` all
    /// become errors here, so endpoint methods only deal with the happy path.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let envelope = self.execute_envelope::<T>(request).await?;
        envelope.data.ok_or_else(|| Error::Api {
            status: 200,
            message: "Invalid response data".to_string(),
        })
    }

    /// Like [`Self::execute`] but tolerates an absent `data` payload.
    pub(crate) async fn execute_ok(&self, request: RequestBuilder) -> Result<()> {
        self.execute_envelope::<serde_json::Value>(request).await?;
        Ok(())
    }

    /// Send a request and return the full envelope (list endpoints need the
    /// `total` field alongside `data`).
    pub(crate) async fn execute_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiEnvelope<T>> {
        let response = self.send(request).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(Self::status_error(status, body_message(&bytes)));
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&bytes)?;
        if !envelope.success {
            debug!("backend reported failure on a 2xx response");
            return Err(Error::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| GENERIC_FALLBACK.to_string()),
            });
        }
        Ok(envelope)
    }

    /// Send a request whose body is NOT wrapped in the envelope (the legacy
    /// contacts endpoint returns a bare JSON array).
    pub(crate) async fn execute_bare<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = self.send(request).await?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(Self::status_error(status, body_message(&bytes)));
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The single place where an HTTP status becomes an error variant.
    fn status_error(status: StatusCode, message: Option<String>) -> Error {
        match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized(
                message.unwrap_or_else(|| UNAUTHORIZED_FALLBACK.to_string()),
            ),
            StatusCode::CONFLICT => Error::Conflict {
                message: message.unwrap_or_else(|| "This email is already registered".to_string()),
            },
            StatusCode::NOT_FOUND => message.map_or_else(
                || Error::NotFound {
                    resource: "requested resource".to_string(),
                },
                |message| Error::Api {
                    status: status.as_u16(),
                    message,
                },
            ),
            _ => Error::Api {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| GENERIC_FALLBACK.to_string()),
            },
        }
    }
}

/// Pull the backend's `message` field out of an error body, if there is one.
fn body_message(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(bytes)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        })
        .filter(|message| !message.is_empty())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_url_normalization() {
        let client = ApiClient::new("http://localhost:9000///");
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_body_message_extraction() {
        assert_eq!(
            body_message(br#"{"success":false,"message":"Nope"}"#),
            Some("Nope".to_string())
        );
        assert_eq!(body_message(br#"{"success":false,"message":""}"#), None);
        assert_eq!(body_message(b"not json"), None);
        assert_eq!(body_message(br#"{"success":false}"#), None);
    }

    #[test]
    fn test_status_error_mapping() {
        let err = ApiClient::status_error(StatusCode::UNAUTHORIZED, None);
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), UNAUTHORIZED_FALLBACK);

        let err = ApiClient::status_error(
            StatusCode::UNAUTHORIZED,
            Some("Unauthorized: token expired".to_string()),
        );
        assert_eq!(err.user_message(), "Unauthorized: token expired");

        let err = ApiClient::status_error(StatusCode::CONFLICT, None);
        assert!(matches!(err, Error::Conflict { .. }));

        let err = ApiClient::status_error(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(matches!(err, Error::Api { status: 500, .. }));

        let err = ApiClient::status_error(StatusCode::NOT_FOUND, None);
        assert!(matches!(err, Error::NotFound { .. }));

        // A 404 with a backend message surfaces that message verbatim
        let err = ApiClient::status_error(StatusCode::NOT_FOUND, Some("Course not found".into()));
        assert_eq!(err.user_message(), "Course not found");
    }
}
