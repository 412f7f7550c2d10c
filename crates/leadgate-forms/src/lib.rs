//! Leadgate Forms - submission controllers for lead-capture flows
//!
//! One controller per form (contact, consultation, support ticket, resume
//! application), each owning its draft fields, a per-field error map, and a
//! submission status. Controllers talk to the backend only through submitter
//! ports, so transports and tests plug in behind the same trait.
//!
//! The lifecycle every controller implements:
//!
//! ```text
//! edit fields -> validate -> submitting -> success (fields reset)
//!                   |                  \-> error   (fields preserved)
//!                   \-> per-field errors, no network call
//! ```
//!
//! Repeated `submit()` calls while a request is in flight are no-ops, so one
//! logical submission never produces more than one network call.

#![warn(missing_docs)]

pub mod collaborators;
pub mod contact;
pub mod consultation;
pub mod ports;
pub mod requests;
pub mod resume;
pub mod status;
pub mod support;

pub use collaborators::{
    CalendarGateway, CollaboratorError, CrmGateway, EmailNotifier, MockCalendarGateway,
    MockCrmGateway, MockEmailNotifier,
};
pub use contact::ContactForm;
pub use consultation::{Collaborators, ConsultationForm};
pub use ports::{
    ConsultationScheduler, ContactSubmitter, ResumeSubmitter, SubmitError, SubmitReceipt,
    SupportSubmitter,
};
pub use requests::{
    ConsultationRequest, ContactRequest, ResumeApplication, SupportTicket, TicketCategory,
    TicketPriority, TicketStatus,
};
pub use resume::{ResumeForm, SimulatedResumeGateway};
pub use status::SubmissionStatus;
pub use support::SupportForm;
