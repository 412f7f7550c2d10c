//! Job application controller and its simulated gateway
//!
//! There is no hiring backend yet. Applications go through the same
//! submitter port as every other form, backed by [`SimulatedResumeGateway`],
//! so the flow (and its UI) will not change when a real endpoint lands.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use leadgate_core::{email, phone, required, DiagnosticLog, FormErrors, ResumeFile};
use uuid::Uuid;

use crate::ports::{ResumeSubmitter, SubmitError, SubmitReceipt};
use crate::requests::ResumeApplication;
use crate::status::SubmissionStatus;

const SUCCESS_MESSAGE: &str = "Application received! Our team will review it and reach out.";

/// Stand-in transport for job applications: waits briefly, then accepts with
/// a generated receipt id.
#[derive(Clone, Debug)]
pub struct SimulatedResumeGateway {
    delay: Duration,
}

impl Default for SimulatedResumeGateway {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(800),
        }
    }
}

impl SimulatedResumeGateway {
    /// Gateway with a custom simulated latency (tests pass zero).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResumeSubmitter for SimulatedResumeGateway {
    async fn submit(&self, application: &ResumeApplication) -> Result<SubmitReceipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        let receipt_id = format!("application-{}", Uuid::new_v4());
        tracing::info!(
            email = %application.email,
            position = %application.position,
            receipt_id = %receipt_id,
            "simulated application submission"
        );
        Ok(SubmitReceipt::with_id(receipt_id))
    }
}

/// Controller for the job application form.
///
/// Name, email and position are required; phone, experience, cover note and
/// the resume attachment are optional. Attachment constraints (5 MB,
/// pdf/doc/docx) are enforced when the file is attached.
pub struct ResumeForm {
    fields: ResumeApplication,
    errors: FormErrors,
    status: SubmissionStatus,
    message: Option<String>,
    submitter: Arc<dyn ResumeSubmitter>,
    diagnostics: DiagnosticLog,
}

impl ResumeForm {
    /// New empty form wired to a transport and a failure log.
    pub fn new(submitter: Arc<dyn ResumeSubmitter>, diagnostics: DiagnosticLog) -> Self {
        Self {
            fields: ResumeApplication::default(),
            errors: FormErrors::new(),
            status: SubmissionStatus::Idle,
            message: None,
            submitter,
            diagnostics,
        }
    }

    /// Current draft application.
    pub fn fields(&self) -> &ResumeApplication {
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

    /// Set the optional phone field.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.fields.phone = value.into();
        self.errors.clear("phone");
    }

    /// Set the role applied for.
    pub fn set_position(&mut self, value: impl Into<String>) {
        self.fields.position = value.into();
        self.errors.clear("position");
    }

    /// Set the optional experience summary.
    pub fn set_experience(&mut self, value: impl Into<String>) {
        self.fields.experience = value.into();
        self.errors.clear("experience");
    }

    /// Set the optional cover note.
    pub fn set_message(&mut self, value: impl Into<String>) {
        self.fields.message = value.into();
        self.errors.clear("message");
    }

    /// Attach a resume file. Validates type and size; a rejected file leaves
    /// the previous attachment (if any) in place and records a field error.
    pub fn attach_resume(&mut self, file_name: impl Into<String>, size_bytes: u64) {
        match ResumeFile::new(file_name, size_bytes) {
            Ok(file) => {
                self.fields.resume_file = Some(file);
                self.errors.clear("resume_file");
            }
            Err(err) => {
                self.errors.check("resume_file", Some(err.to_string()));
            }
        }
    }

    /// Remove the attachment.
    pub fn clear_resume(&mut self) {
        self.fields.resume_file = None;
        self.errors.clear("resume_file");
    }

    /// Run every field check, replacing the error map wholesale. Returns
    /// true when the application may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        errors.check("name", required(&self.fields.name));
        errors.check("email", required(&self.fields.email));
        errors.check("email", email(&self.fields.email));
        errors.check("phone", phone(&self.fields.phone));
        errors.check("position", required(&self.fields.position));
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Validate and, if clean, submit. Same lifecycle guarantees as every
    /// other form: no duplicate in-flight calls, fields reset on success.
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
                self.fields = ResumeApplication::default();
                self.status = SubmissionStatus::Success;
                self.message = Some(receipt.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                self.diagnostics.record("resume.submit", err.api.clone());
                self.status = SubmissionStatus::Error;
                self.message = Some(err.api.message);
                if !err.field_errors.is_empty() {
                    self.errors = err.field_errors;
                }
            }
        }
    }
}
