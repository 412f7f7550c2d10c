//! Consultation collaborator ports
//!
//! The consultation flow wants to confirm by email, drop a calendar hold and
//! open a CRM lead once the backend accepts a booking. Each capability is a
//! narrow port so vendor integrations (SendGrid, Google Calendar, HubSpot,
//! ...) can be added without touching the flow; only mock implementations
//! exist today. Collaborator failures never fail the user's submission — the
//! backend holds the booking of record.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::requests::ConsultationRequest;

/// A collaborator call that did not go through.
#[derive(Clone, Debug, Error)]
#[error("{service}: {message}")]
pub struct CollaboratorError {
    /// Which collaborator failed.
    pub service: &'static str,
    /// What went wrong.
    pub message: String,
}

/// Sends booking confirmations.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Confirm the booking to the requester.
    async fn send_confirmation(&self, request: &ConsultationRequest)
        -> Result<(), CollaboratorError>;
    /// Tell the team a booking came in.
    async fn notify_admin(&self, request: &ConsultationRequest) -> Result<(), CollaboratorError>;
}

/// Places calendar holds.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// Create a calendar event, returning its id.
    async fn create_event(&self, request: &ConsultationRequest)
        -> Result<String, CollaboratorError>;
}

/// Opens CRM leads.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    /// Create a lead, returning its id.
    async fn create_lead(&self, request: &ConsultationRequest)
        -> Result<String, CollaboratorError>;
}

/// Logging stand-in for a mail provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockEmailNotifier;

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send_confirmation(
        &self,
        request: &ConsultationRequest,
    ) -> Result<(), CollaboratorError> {
        tracing::info!(email = %request.email, "mock: consultation confirmation email");
        Ok(())
    }

    async fn notify_admin(&self, request: &ConsultationRequest) -> Result<(), CollaboratorError> {
        tracing::info!(
            name = %request.name,
            project_type = %request.project_type,
            "mock: admin notification for new consultation"
        );
        Ok(())
    }
}

/// Logging stand-in for a calendar provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockCalendarGateway;

#[async_trait]
impl CalendarGateway for MockCalendarGateway {
    async fn create_event(
        &self,
        request: &ConsultationRequest,
    ) -> Result<String, CollaboratorError> {
        let event_id = format!("mock-event-{}", Uuid::new_v4());
        tracing::info!(email = %request.email, event_id = %event_id, "mock: calendar event");
        Ok(event_id)
    }
}

/// Logging stand-in for a CRM.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockCrmGateway;

#[async_trait]
impl CrmGateway for MockCrmGateway {
    async fn create_lead(&self, request: &ConsultationRequest) -> Result<String, CollaboratorError> {
        let lead_id = format!("mock-lead-{}", Uuid::new_v4());
        tracing::info!(email = %request.email, lead_id = %lead_id, "mock: CRM lead");
        Ok(lead_id)
    }
}
