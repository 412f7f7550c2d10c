//! Submitter ports
//!
//! Hexagonal seams between controllers and transport: controllers depend only
//! on these traits, the HTTP clients (or test doubles) implement them. A port
//! call resolves on every ordinary failure path — HTTP 4xx/5xx, malformed
//! bodies, unreachable network all come back as [`SubmitError`], never as a
//! panic — so controllers can guarantee the status machine always terminates.

use async_trait::async_trait;
use leadgate_core::{ApiError, FormErrors};
use thiserror::Error;

use crate::requests::{ConsultationRequest, ContactRequest, ResumeApplication, SupportTicket};

/// What a successful submission came back with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// Server-assigned identifier (ticket id, consultation id, ...).
    pub id: Option<String>,
    /// Server-provided confirmation message, when the API sends one.
    pub message: Option<String>,
}

impl SubmitReceipt {
    /// A receipt carrying only an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            message: None,
        }
    }
}

/// A failed submission: the normalized failure plus any per-field detail the
/// server attributed (per-field detail takes display precedence).
#[derive(Clone, Debug, Error)]
#[error("{api}")]
pub struct SubmitError {
    /// Normalized failure for the top-level message.
    pub api: ApiError,
    /// Server-attributed per-field errors, empty when none were given.
    pub field_errors: FormErrors,
}

impl SubmitError {
    /// Failure with server-attributed per-field detail.
    pub fn with_field_errors(api: ApiError, field_errors: FormErrors) -> Self {
        Self { api, field_errors }
    }
}

impl From<ApiError> for SubmitError {
    fn from(api: ApiError) -> Self {
        Self {
            api,
            field_errors: FormErrors::new(),
        }
    }
}

/// Transport for the contact form.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Deliver a contact inquiry.
    async fn submit(&self, request: &ContactRequest) -> Result<SubmitReceipt, SubmitError>;
}

/// Transport for consultation booking.
#[async_trait]
pub trait ConsultationScheduler: Send + Sync {
    /// Book a consultation slot.
    async fn schedule(&self, request: &ConsultationRequest) -> Result<SubmitReceipt, SubmitError>;
}

/// Transport for support tickets.
#[async_trait]
pub trait SupportSubmitter: Send + Sync {
    /// File a support ticket.
    async fn submit(&self, ticket: &SupportTicket) -> Result<SubmitReceipt, SubmitError>;
}

/// Transport for job applications.
#[async_trait]
pub trait ResumeSubmitter: Send + Sync {
    /// Deliver a job application.
    async fn submit(&self, application: &ResumeApplication) -> Result<SubmitReceipt, SubmitError>;
}
