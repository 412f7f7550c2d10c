//! Contact inquiry client

use async_trait::async_trait;
use leadgate_core::ApiError;
use leadgate_forms::{ContactRequest, ContactSubmitter, SubmitError, SubmitReceipt};
use serde::Deserialize;

use crate::api::{submit_error, Api, ApiConfig};

const SUBMIT_PATH: &str = "/api/contact/submit/";

/// Client for `POST /api/contact/submit/`.
#[derive(Clone, Debug)]
pub struct ContactClient {
    api: Api,
}

#[derive(Debug, Deserialize)]
struct ContactResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl ContactClient {
    /// Client against the configured backend.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            api: Api::new(config),
        }
    }
}

#[async_trait]
impl ContactSubmitter for ContactClient {
    async fn submit(&self, request: &ContactRequest) -> Result<SubmitReceipt, SubmitError> {
        let response: ContactResponse = self
            .api
            .post_json(SUBMIT_PATH, request)
            .await
            .map_err(submit_error)?;

        if response.success {
            Ok(SubmitReceipt::default())
        } else {
            // 2xx with an application-level rejection in the body
            Err(ApiError::rejected(
                response
                    .error
                    .unwrap_or_else(|| "An unexpected error occurred.".to_string()),
            )
            .into())
        }
    }
}
