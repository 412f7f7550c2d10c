//! Submission status lifecycle

use serde::{Deserialize, Serialize};

/// Where a form currently is in its submission lifecycle.
///
/// Transitions: `Idle -> Submitting -> Success | Error`. A controller in
/// `Submitting` ignores further submit calls; every outcome, including
/// transport failure, leaves `Submitting` — there is no stuck state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Nothing in flight; the form is editable.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The last submission was accepted; fields have been reset.
    Success,
    /// The last submission failed; fields are preserved for correction.
    Error,
}

impl SubmissionStatus {
    /// True while a request is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
