//! Shared HTTP plumbing
//!
//! One thin reqwest wrapper serves every first-party client: JSON in, JSON
//! out, and every failure path — unreachable host, HTTP error status,
//! malformed body — comes back as a classified [`ApiError`] instead of a
//! panic or a raw transport error. Responses the client cannot make sense of
//! fail closed into the `Unknown` kind. No automatic retry: resubmission is
//! always an explicit user action.

use std::time::Duration;

use leadgate_core::{ApiError, FormErrors};
use leadgate_forms::SubmitError;
use reqwest::header;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// Environment variable naming the backend base URL.
pub const API_BASE_ENV: &str = "API_BASE";

/// Fallback backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend endpoint configuration shared by all first-party clients.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Read the base URL from `API_BASE`, falling back to localhost.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_BASE_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            ..Default::default()
        }
    }
}

/// A classified failure plus the response body (when one arrived) so callers
/// can lift server-attributed detail like per-field validation errors.
#[derive(Clone, Debug)]
pub(crate) struct ApiFailure {
    pub error: ApiError,
    pub body: Option<serde_json::Value>,
}

impl From<ApiError> for ApiFailure {
    fn from(error: ApiError) -> Self {
        Self { error, body: None }
    }
}

/// Internal reqwest wrapper shared by the domain clients.
#[derive(Clone, Debug)]
pub(crate) struct Api {
    http: reqwest::Client,
    base_url: Url,
}

impl Api {
    /// Build the wrapper. Panics only on construction-time misconfiguration
    /// (unparseable base URL), never on a request path.
    pub(crate) fn new(config: &ApiConfig) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        let base_url = Url::parse(&config.base_url).expect("Invalid API base URL");

        Self { http, base_url }
    }

    /// POST `body` as JSON and parse the response as `T`.
    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiFailure>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let request = self.http.post(url).json(body);
        self.execute(path, request).await
    }

    /// GET and parse the response as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiFailure> {
        let url = self.endpoint(path)?;
        let request = self.http.get(url);
        self.execute(path, request).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiFailure> {
        self.base_url.join(path).map_err(|err| {
            tracing::error!(path, error = %err, "endpoint construction failed");
            ApiError::malformed_response().into()
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiFailure> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(path, error = %err, "request did not reach the backend");
                return Err(ApiError::network().into());
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(path, error = %err, "response body never arrived");
                return Err(ApiError::network().into());
            }
        };

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|err| {
                tracing::warn!(path, error = %err, "unparseable success response");
                ApiError::malformed_response().into()
            });
        }

        let body: Option<serde_json::Value> = serde_json::from_slice(&bytes).ok();
        let server_message = body
            .as_ref()
            .and_then(|value| value.get("error"))
            .and_then(|value| value.as_str())
            .map(String::from);
        let error = ApiError::from_status(status.as_u16(), server_message);
        tracing::warn!(path, status = status.as_u16(), kind = ?error.kind, "backend rejected request");
        Err(ApiFailure { error, body })
    }
}

/// Lift a transport failure into a [`SubmitError`], pulling per-field detail
/// out of an `errors` object when the server attributed any (the backend
/// sends `{"field": ["message", ...]}` maps on validation failure).
pub(crate) fn submit_error(failure: ApiFailure) -> SubmitError {
    let field_errors = failure
        .body
        .as_ref()
        .and_then(|body| body.get("errors"))
        .and_then(|errors| errors.as_object())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|(field, value)| {
                    field_message(value).map(|message| (field.clone(), message))
                })
                .collect::<FormErrors>()
        })
        .unwrap_or_default();
    SubmitError::with_field_errors(failure.error, field_errors)
}

fn field_message(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(messages) => {
            let joined: Vec<&str> = messages.iter().filter_map(|m| m.as_str()).collect();
            if joined.is_empty() {
                None
            } else {
                Some(joined.join(", "))
            }
        }
        _ => None,
    }
}
