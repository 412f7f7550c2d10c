//! Typed request payloads for the four lead-capture flows
//!
//! These doubles as controller draft state: every type starts empty via
//! `Default`, is owned by exactly one controller, and is discarded (reset) on
//! a successful submission. Nothing here is persisted client-side.

use chrono::NaiveDate;
use leadgate_core::{ResumeFile, TimeSlot};
use serde::{Deserialize, Serialize};

/// General contact inquiry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,
    /// Reply-to address.
    pub email: String,
    /// Requested service, free-form ("web-development", ...). Optional.
    #[serde(default)]
    pub service: String,
    /// Inquiry body.
    pub message: String,
}

/// Consultation booking request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    /// Requester name.
    pub name: String,
    /// Requester address.
    pub email: String,
    /// Optional phone, "+countrycode number" form, capped at 15 characters.
    #[serde(default)]
    pub phone: String,
    /// Optional company name.
    #[serde(default)]
    pub company: String,
    /// What the project is about.
    pub project_type: String,
    /// Calendar date for the call. Time-of-day lives in `preferred_time`.
    pub preferred_date: Option<NaiveDate>,
    /// 30-minute slot on the booking grid.
    pub preferred_time: Option<TimeSlot>,
    /// Optional free-form notes.
    #[serde(default)]
    pub additional_notes: String,
}

/// Ticket urgency. The backend treats unset as `Medium`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    /// Can wait.
    Low,
    /// Default urgency.
    #[default]
    Medium,
    /// Needs prompt attention.
    High,
    /// Production down.
    Critical,
}

/// Ticket classification. The backend treats unset as `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    /// Something is broken.
    Bug,
    /// Feature request.
    Feature,
    /// Slowness or resource issues.
    Performance,
    /// Security concern.
    Security,
    /// Anything else.
    #[default]
    Other,
}

/// Server-side ticket state. Never set by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Awaiting triage.
    Open,
    /// Being worked on.
    InProgress,
    /// Fix delivered.
    Resolved,
    /// Done.
    Closed,
}

/// Support ticket. `id`, `status` and the timestamps are server-assigned;
/// the client leaves them unset and they are omitted from request bodies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    /// Server-assigned identifier. The backend emits integers; older
    /// responses carried strings, so both are accepted.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_id"
    )]
    pub id: Option<String>,
    /// Reporter name.
    pub name: String,
    /// Reporter address.
    pub email: String,
    /// Urgency; defaults to medium when the reporter picks nothing.
    #[serde(default)]
    pub priority: TicketPriority,
    /// Classification; defaults to other when the reporter picks nothing.
    #[serde(default)]
    pub category: TicketCategory,
    /// One-line summary.
    pub subject: String,
    /// Full description.
    pub message: String,
    /// Server-assigned workflow state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    /// Server-assigned creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Server-assigned update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Job application. Has no real backend; submissions go through a simulated
/// gateway until one exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeApplication {
    /// Applicant name.
    pub name: String,
    /// Applicant address.
    pub email: String,
    /// Optional phone.
    #[serde(default)]
    pub phone: String,
    /// Role applied for.
    pub position: String,
    /// Optional experience summary.
    #[serde(default)]
    pub experience: String,
    /// Optional cover note.
    #[serde(default)]
    pub message: String,
    /// Optional attachment metadata (validated: <= 5 MB, pdf/doc/docx).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_file: Option<ResumeFile>,
}

// Accepts a JSON number or string and normalizes to String.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
