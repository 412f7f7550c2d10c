//! Consultation scheduling client

use async_trait::async_trait;
use chrono::NaiveDate;
use leadgate_core::ApiError;
use leadgate_forms::{ConsultationRequest, ConsultationScheduler, SubmitError, SubmitReceipt};
use serde::{Deserialize, Serialize};

use crate::api::{submit_error, Api, ApiConfig};

const SCHEDULE_PATH: &str = "/api/consultation/schedule/";

/// Client for `POST /api/consultation/schedule/`.
#[derive(Clone, Debug)]
pub struct ConsultationClient {
    api: Api,
}

/// Wire body. `preferred_date` goes out as a plain `YYYY-MM-DD` calendar
/// date — deliberately lossy, the backend stores no time-of-day or timezone.
#[derive(Debug, Serialize)]
struct SchedulePayload<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    company: &'a str,
    project_type: &'a str,
    preferred_date: NaiveDate,
    preferred_time: &'a str,
    additional_notes: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    consultation_id: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

impl ConsultationClient {
    /// Client against the configured backend.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            api: Api::new(config),
        }
    }
}

#[async_trait]
impl ConsultationScheduler for ConsultationClient {
    async fn schedule(&self, request: &ConsultationRequest) -> Result<SubmitReceipt, SubmitError> {
        // The controller validates before calling; a missing date or slot
        // here is a caller bug surfaced as a validation failure, not a panic.
        let (preferred_date, preferred_time) =
            match (request.preferred_date, request.preferred_time) {
                (Some(date), Some(slot)) => (date, slot),
                _ => {
                    return Err(ApiError {
                        kind: leadgate_core::ErrorKind::Validation,
                        message: "Preferred date and time are required.".to_string(),
                        status: None,
                    }
                    .into())
                }
            };

        let payload = SchedulePayload {
            name: &request.name,
            email: &request.email,
            phone: &request.phone,
            company: &request.company,
            project_type: &request.project_type,
            preferred_date,
            preferred_time: preferred_time.as_str(),
            additional_notes: &request.additional_notes,
        };

        let response: ScheduleResponse = self
            .api
            .post_json(SCHEDULE_PATH, &payload)
            .await
            .map_err(submit_error)?;

        if response.success {
            Ok(SubmitReceipt {
                id: response.consultation_id.map(id_to_string),
                message: None,
            })
        } else {
            Err(ApiError::rejected(
                response
                    .error
                    .unwrap_or_else(|| "Failed to schedule consultation".to_string()),
            )
            .into())
        }
    }
}

// The backend sends numeric ids; be lenient about strings.
fn id_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
