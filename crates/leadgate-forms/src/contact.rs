//! Contact form controller

use std::sync::Arc;

use leadgate_core::{email, min_length, required, DiagnosticLog, FormErrors};

use crate::ports::ContactSubmitter;
use crate::requests::ContactRequest;
use crate::status::SubmissionStatus;

const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// Controller for the general contact form.
///
/// Owns the draft [`ContactRequest`], the per-field error map and the
/// submission status. Name, email and message are required; the service
/// picker is optional.
pub struct ContactForm {
    fields: ContactRequest,
    errors: FormErrors,
    status: SubmissionStatus,
    message: Option<String>,
    submitter: Arc<dyn ContactSubmitter>,
    diagnostics: DiagnosticLog,
}

impl ContactForm {
    /// New empty form wired to a transport and a failure log.
    pub fn new(submitter: Arc<dyn ContactSubmitter>, diagnostics: DiagnosticLog) -> Self {
        Self {
            fields: ContactRequest::default(),
            errors: FormErrors::new(),
            status: SubmissionStatus::Idle,
            message: None,
            submitter,
            diagnostics,
        }
    }

    /// Current draft fields.
    pub fn fields(&self) -> &ContactRequest {
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

    /// Top-level outcome message (confirmation or failure), if any.
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

    /// Set the requested service.
    pub fn set_service(&mut self, value: impl Into<String>) {
        self.fields.service = value.into();
        self.errors.clear("service");
    }

    /// Set the inquiry body.
    pub fn set_message(&mut self, value: impl Into<String>) {
        self.fields.message = value.into();
        self.errors.clear("message");
    }

    /// Run every field check, replacing the error map wholesale. Returns
    /// true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        errors.check("name", required(&self.fields.name));
        errors.check("name", min_length(2)(&self.fields.name));
        errors.check("email", required(&self.fields.email));
        errors.check("email", email(&self.fields.email));
        errors.check("message", required(&self.fields.message));
        errors.check("message", min_length(10)(&self.fields.message));
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Validate and, if clean, submit. No-op while a request is in flight;
    /// aborts without a network call when validation fails. On success the
    /// fields reset to empty; on failure they are preserved for correction.
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
                tracing::info!(email = %self.fields.email, "contact inquiry accepted");
                self.fields = ContactRequest::default();
                self.status = SubmissionStatus::Success;
                self.message = Some(receipt.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                self.diagnostics.record("contact.submit", err.api.clone());
                self.status = SubmissionStatus::Error;
                self.message = Some(err.api.message);
                if !err.field_errors.is_empty() {
                    self.errors = err.field_errors;
                }
            }
        }
    }
}
