//! Support ticket client

use async_trait::async_trait;
use leadgate_core::{ApiError, DiagnosticLog};
use leadgate_forms::{SubmitError, SubmitReceipt, SupportSubmitter, SupportTicket};
use serde::Deserialize;

use crate::api::{submit_error, Api, ApiConfig};

const SUBMIT_PATH: &str = "/api/support/submit/";
const TICKETS_PATH: &str = "/api/support/tickets/";

/// Client for the support endpoints: `POST /api/support/submit/` and
/// `GET /api/support/tickets/`.
///
/// Carries a [`DiagnosticLog`] because the listing call has no controller in
/// front of it to capture failures.
#[derive(Clone, Debug)]
pub struct SupportClient {
    api: Api,
    diagnostics: DiagnosticLog,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    ticket_id: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TicketsResponse {
    #[serde(default)]
    tickets: Vec<SupportTicket>,
}

impl SupportClient {
    /// Client against the configured backend.
    pub fn new(config: &ApiConfig, diagnostics: DiagnosticLog) -> Self {
        Self {
            api: Api::new(config),
            diagnostics,
        }
    }

    /// Fetch all tickets. Failures are classified and recorded, never
    /// collapsed into an empty list.
    pub async fn tickets(&self) -> Result<Vec<SupportTicket>, ApiError> {
        let response: TicketsResponse = self.api.get_json(TICKETS_PATH).await.map_err(|failure| {
            self.diagnostics.record("support.tickets", failure.error.clone());
            failure.error
        })?;
        Ok(response.tickets)
    }
}

#[async_trait]
impl SupportSubmitter for SupportClient {
    async fn submit(&self, ticket: &SupportTicket) -> Result<SubmitReceipt, SubmitError> {
        let response: SubmitResponse = self
            .api
            .post_json(SUBMIT_PATH, ticket)
            .await
            .map_err(submit_error)?;

        if response.success {
            Ok(SubmitReceipt {
                id: response.ticket_id.map(|value| match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                }),
                message: response.message,
            })
        } else {
            Err(ApiError::rejected(
                response
                    .error
                    .or(response.message)
                    .unwrap_or_else(|| "An unexpected error occurred.".to_string()),
            )
            .into())
        }
    }
}
