//! Support ticket controller

use std::sync::Arc;

use leadgate_core::{email, required, DiagnosticLog, FormErrors};

use crate::ports::SupportSubmitter;
use crate::requests::{SupportTicket, TicketCategory, TicketPriority};
use crate::status::SubmissionStatus;

const SUCCESS_MESSAGE: &str = "Support ticket submitted successfully! We'll get back to you soon.";

/// Controller for the support ticket form.
///
/// Name, email, subject and message are required; priority and category fall
/// back to their defaults (medium / other) when the reporter picks nothing.
/// When the server attributes validation errors to fields, those take
/// precedence over the top-level message.
pub struct SupportForm {
    fields: SupportTicket,
    errors: FormErrors,
    status: SubmissionStatus,
    message: Option<String>,
    submitter: Arc<dyn SupportSubmitter>,
    diagnostics: DiagnosticLog,
}

impl SupportForm {
    /// New empty form wired to a transport and a failure log.
    pub fn new(submitter: Arc<dyn SupportSubmitter>, diagnostics: DiagnosticLog) -> Self {
        Self {
            fields: SupportTicket::default(),
            errors: FormErrors::new(),
            status: SubmissionStatus::Idle,
            message: None,
            submitter,
            diagnostics,
        }
    }

    /// Current draft ticket.
    pub fn fields(&self) -> &SupportTicket {
        &self.fields
    }

    /// Current per-field errors.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Current lifecycle status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Top-level outcome message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Set the name field. Editing clears the field's own error.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
        self.errors.clear("name");
    }

    /// Set the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
        self.errors.clear("email");
    }

    /// Pick the urgency.
    pub fn set_priority(&mut self, value: TicketPriority) {
        self.fields.priority = value;
        self.errors.clear("priority");
    }

    /// Pick the classification.
    pub fn set_category(&mut self, value: TicketCategory) {
        self.fields.category = value;
        self.errors.clear("category");
    }

    /// Set the one-line summary.
    pub fn set_subject(&mut self, value: impl Into<String>) {
        self.fields.subject = value.into();
        self.errors.clear("subject");
    }

    /// Set the full description.
    pub fn set_message(&mut self, value: impl Into<String>) {
        self.fields.message = value.into();
        self.errors.clear("message");
    }

    /// Run every field check, replacing the error map wholesale. Returns
    /// true when the ticket may be filed.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        errors.check("name", required(&self.fields.name));
        errors.check("email", required(&self.fields.email));
        errors.check("email", email(&self.fields.email));
        errors.check("subject", required(&self.fields.subject));
        errors.check("message", required(&self.fields.message));
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Validate and, if clean, file the ticket. No-op while a request is in
    /// flight; resets fields on success, preserves them on failure.
    pub async fn submit(&mut self) {
        if self.status.is_submitting() {
            return;
        }
        if !self.validate() {
            return;
        }
        self.status = SubmissionStatus::Submitting;
        self.message = None;

        match self.submitter.submit(&self.fields).await {
            Ok(receipt) => {
                tracing::info!(
                    ticket_id = receipt.id.as_deref().unwrap_or("-"),
                    "support ticket filed"
                );
                self.fields = SupportTicket::default();
                self.status = SubmissionStatus::Success;
                self.message = Some(receipt.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                self.diagnostics.record("support.submit", err.api.clone());
                self.status = SubmissionStatus::Error;
                self.message = Some(err.api.message);
                if !err.field_errors.is_empty() {
                    self.errors = err.field_errors;
                }
            }
        }
    }
}
