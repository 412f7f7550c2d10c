//! Leadgate Core - Shared lead-capture primitives
//!
//! This crate provides the leaves every form flow builds on:
//! - Per-field validators and the `FormErrors` map
//! - The closed error taxonomy (`ErrorKind`, `ApiError`) that normalizes
//!   transport and HTTP failures into stable user-facing messages
//! - The injectable, bounded `DiagnosticLog` failure collector
//! - Value objects: consultation `TimeSlot`, `ResumeFile`

#![warn(missing_docs)]

pub mod diagnostics;
pub mod error;
pub mod resume;
pub mod slots;
pub mod validation;

pub use diagnostics::{DiagnosticEntry, DiagnosticLog};
pub use error::{ApiError, ErrorKind};
pub use resume::{ResumeFile, ResumeFileError};
pub use slots::{TimeSlot, TimeSlotError};
pub use validation::{email, max_length, min_length, phone, required, FormErrors};
