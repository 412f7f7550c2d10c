//! Consultation booking controller

use std::sync::Arc;

use chrono::NaiveDate;
use leadgate_core::{
    email, max_length, phone, required, ApiError, DiagnosticLog, FormErrors, TimeSlot,
};

use crate::collaborators::{CalendarGateway, CrmGateway, EmailNotifier};
use crate::ports::ConsultationScheduler;
use crate::requests::ConsultationRequest;
use crate::status::SubmissionStatus;

const SUCCESS_MESSAGE: &str =
    "Consultation scheduled successfully! We'll send you a confirmation email with meeting details.";

/// Optional post-booking collaborators. All best-effort: a failing
/// collaborator is logged and recorded, never surfaced as a submission
/// failure.
#[derive(Default)]
pub struct Collaborators {
    /// Confirmation / admin-notification mailer.
    pub email: Option<Arc<dyn EmailNotifier>>,
    /// Calendar hold creator.
    pub calendar: Option<Arc<dyn CalendarGateway>>,
    /// CRM lead creator.
    pub crm: Option<Arc<dyn CrmGateway>>,
}

/// Controller for the consultation booking form.
///
/// Requires name, email, project type, a calendar date and a slot on the
/// booking grid; phone (loose international form, max 15 characters) and
/// company are optional.
pub struct ConsultationForm {
    fields: ConsultationRequest,
    errors: FormErrors,
    status: SubmissionStatus,
    message: Option<String>,
    scheduler: Arc<dyn ConsultationScheduler>,
    collaborators: Collaborators,
    diagnostics: DiagnosticLog,
}

impl ConsultationForm {
    /// New empty form wired to a scheduler and a failure log.
    pub fn new(scheduler: Arc<dyn ConsultationScheduler>, diagnostics: DiagnosticLog) -> Self {
        Self {
            fields: ConsultationRequest::default(),
            errors: FormErrors::new(),
            status: SubmissionStatus::Idle,
            message: None,
            scheduler,
            collaborators: Collaborators::default(),
            diagnostics,
        }
    }

    /// Attach post-booking collaborators.
    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    /// Current draft fields.
    pub fn fields(&self) -> &ConsultationRequest {
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

    /// Set the optional company field.
    pub fn set_company(&mut self, value: impl Into<String>) {
        self.fields.company = value.into();
        self.errors.clear("company");
    }

    /// Set the project type.
    pub fn set_project_type(&mut self, value: impl Into<String>) {
        self.fields.project_type = value.into();
        self.errors.clear("project_type");
    }

    /// Pick the calendar date.
    pub fn set_preferred_date(&mut self, value: Option<NaiveDate>) {
        self.fields.preferred_date = value;
        self.errors.clear("preferred_date");
    }

    /// Pick the time slot.
    pub fn set_preferred_time(&mut self, value: Option<TimeSlot>) {
        self.fields.preferred_time = value;
        self.errors.clear("preferred_time");
    }

    /// Set the optional notes field.
    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.fields.additional_notes = value.into();
        self.errors.clear("additional_notes");
    }

    /// Run every field check, replacing the error map wholesale. Returns
    /// true when the form may be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        errors.check("name", required(&self.fields.name));
        errors.check("email", required(&self.fields.email));
        errors.check("email", email(&self.fields.email));
        errors.check("phone", phone(&self.fields.phone));
        errors.check("phone", max_length(15)(&self.fields.phone));
        errors.check("project_type", required(&self.fields.project_type));
        if self.fields.preferred_date.is_none() {
            errors.check("preferred_date", required(""));
        }
        if self.fields.preferred_time.is_none() {
            errors.check("preferred_time", required(""));
        }
        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    /// Validate and, if clean, book. No-op while a request is in flight.
    /// After a successful booking the collaborators run best-effort, then
    /// the fields reset.
    pub async fn submit(&mut self) {
        if self.status.is_submitting() {
            return;
        }
        if !self.validate() {
            return;
        }
        self.status = SubmissionStatus::Submitting;
        self.message = None;

        match self.scheduler.schedule(&self.fields).await {
            Ok(receipt) => {
                tracing::info!(
                    email = %self.fields.email,
                    consultation_id = receipt.id.as_deref().unwrap_or("-"),
                    "consultation scheduled"
                );
                self.run_collaborators().await;
                self.fields = ConsultationRequest::default();
                self.status = SubmissionStatus::Success;
                self.message = Some(receipt.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()));
            }
            Err(err) => {
                self.diagnostics.record("consultation.schedule", err.api.clone());
                self.status = SubmissionStatus::Error;
                self.message = Some(err.api.message);
                if !err.field_errors.is_empty() {
                    self.errors = err.field_errors;
                }
            }
        }
    }

    async fn run_collaborators(&self) {
        if let Some(mailer) = &self.collaborators.email {
            if let Err(err) = mailer.send_confirmation(&self.fields).await {
                self.record_collaborator_failure(err.to_string());
            }
            if let Err(err) = mailer.notify_admin(&self.fields).await {
                self.record_collaborator_failure(err.to_string());
            }
        }
        if let Some(calendar) = &self.collaborators.calendar {
            match calendar.create_event(&self.fields).await {
                Ok(event_id) => tracing::info!(event_id = %event_id, "calendar hold created"),
                Err(err) => self.record_collaborator_failure(err.to_string()),
            }
        }
        if let Some(crm) = &self.collaborators.crm {
            match crm.create_lead(&self.fields).await {
                Ok(lead_id) => tracing::info!(lead_id = %lead_id, "CRM lead created"),
                Err(err) => self.record_collaborator_failure(err.to_string()),
            }
        }
    }

    fn record_collaborator_failure(&self, message: String) {
        self.diagnostics
            .record("consultation.collaborator", ApiError::rejected(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::CollaboratorError;
    use crate::ports::{SubmitError, SubmitReceipt};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedScheduler {
        calls: AtomicUsize,
        outcome: Result<SubmitReceipt, SubmitError>,
    }

    impl ScriptedScheduler {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Ok(SubmitReceipt::with_id("77")),
            })
        }

        fn failing(api: ApiError) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcome: Err(api.into()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ConsultationScheduler for ScriptedScheduler {
        async fn schedule(
            &self,
            _request: &ConsultationRequest,
        ) -> Result<SubmitReceipt, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    struct FailingCalendar;

    #[async_trait]
    impl CalendarGateway for FailingCalendar {
        async fn create_event(
            &self,
            _request: &ConsultationRequest,
        ) -> Result<String, CollaboratorError> {
            Err(CollaboratorError {
                service: "calendar",
                message: "provider unreachable".to_string(),
            })
        }
    }

    fn filled_form(scheduler: Arc<ScriptedScheduler>, diagnostics: DiagnosticLog) -> ConsultationForm {
        let mut form = ConsultationForm::new(scheduler, diagnostics);
        form.set_name("Grace Hopper");
        form.set_email("grace@example.com");
        form.set_phone("+91 1234567890");
        form.set_project_type("backend-api");
        form.set_preferred_date(NaiveDate::from_ymd_opt(2025, 1, 24));
        form.set_preferred_time(TimeSlot::parse("2:30 PM").ok());
        form
    }

    #[tokio::test]
    async fn test_missing_date_blocks_submission() {
        let scheduler = ScriptedScheduler::ok();
        let mut form = filled_form(scheduler.clone(), DiagnosticLog::new());
        form.set_preferred_date(None);

        form.submit().await;

        assert_eq!(scheduler.calls(), 0);
        assert_eq!(
            form.errors().get("preferred_date"),
            Some("This field is required")
        );
    }

    #[tokio::test]
    async fn test_bad_phone_blocks_submission() {
        let scheduler = ScriptedScheduler::ok();
        let mut form = filled_form(scheduler.clone(), DiagnosticLog::new());
        form.set_phone("12345");

        form.submit().await;

        assert_eq!(scheduler.calls(), 0);
        assert_eq!(
            form.errors().get("phone"),
            Some("Please enter a valid phone number with country code (e.g., +91 1234567890)")
        );
    }

    #[tokio::test]
    async fn test_success_resets_and_reports() {
        let scheduler = ScriptedScheduler::ok();
        let mut form = filled_form(scheduler.clone(), DiagnosticLog::new());

        form.submit().await;

        assert_eq!(scheduler.calls(), 1);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.fields(), &ConsultationRequest::default());
        assert_eq!(form.message(), Some(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_server_error_preserves_fields() {
        let scheduler = ScriptedScheduler::failing(ApiError::from_status(500, None));
        let mut form = filled_form(scheduler, DiagnosticLog::new());
        let before = form.fields().clone();

        form.submit().await;

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
        assert_eq!(form.message(), Some("Server error. Please try again later."));
    }

    #[tokio::test]
    async fn test_collaborator_failure_does_not_fail_booking() {
        let scheduler = ScriptedScheduler::ok();
        let diagnostics = DiagnosticLog::new();
        let mut form = filled_form(scheduler, diagnostics.clone()).with_collaborators(
            Collaborators {
                calendar: Some(Arc::new(FailingCalendar)),
                ..Default::default()
            },
        );

        form.submit().await;

        assert_eq!(form.status(), SubmissionStatus::Success);
        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].context, "consultation.collaborator");
    }

    #[test]
    fn test_phone_over_15_chars_rejected() {
        let mut form = filled_form(ScriptedScheduler::ok(), DiagnosticLog::new());
        form.set_phone("+123 12345678901234");
        assert!(!form.validate());
        assert!(form.errors().get("phone").is_some());
    }
}
