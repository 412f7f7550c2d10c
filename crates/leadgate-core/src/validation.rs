//! Per-field validators and the form error map
//!
//! Every validator is a pure function from a field value to an optional
//! user-facing message (`None` = valid). All rules except [`required`] treat
//! an empty value as valid, so rules compose without ordering constraints:
//! `required` owns emptiness, everything else owns format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fails when the value is empty or whitespace-only.
pub fn required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("This field is required".to_string())
    } else {
        None
    }
}

/// Fails unless the value looks like `local@domain.tld`.
///
/// Empty values pass; pair with [`required`] for mandatory fields.
pub fn email(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if is_valid_email(value) {
        None
    } else {
        Some("Please enter a valid email address".to_string())
    }
}

// RFC-lite: non-space local part, '@', non-space domain containing a dot.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}

/// Fails unless the value (whitespace stripped) is an optional `+`, a 1-3
/// digit country code, then exactly 10 digits.
///
/// Empty values pass; the field is optional on every form that carries it.
pub fn phone(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if is_valid_phone(&stripped) {
        None
    } else {
        Some(
            "Please enter a valid phone number with country code (e.g., +91 1234567890)"
                .to_string(),
        )
    }
}

fn is_valid_phone(digits: &str) -> bool {
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    // country code (1-3 digits) followed by a 10-digit number
    (11..=13).contains(&digits.len())
}

/// Fails when the value is shorter than `min` characters. Empty values pass.
pub fn min_length(min: usize) -> impl Fn(&str) -> Option<String> {
    move |value: &str| {
        if value.is_empty() || value.chars().count() >= min {
            None
        } else {
            Some(format!("Must be at least {min} characters"))
        }
    }
}

/// Fails when the value is longer than `max` characters. Empty values pass.
pub fn max_length(max: usize) -> impl Fn(&str) -> Option<String> {
    move |value: &str| {
        if value.chars().count() <= max {
            None
        } else {
            Some(format!("Must be no more than {max} characters"))
        }
    }
}

/// Field name to user-facing message map produced by a validation pass.
///
/// Ordered so error listings render deterministically. A validation pass
/// replaces the whole map (never merges) so stale errors cannot survive a
/// field becoming valid; editing a field clears exactly that field's entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    /// Empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check for `field`. `None` messages are ignored, so a
    /// validation routine can feed validator output straight in.
    pub fn check(&mut self, field: &str, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.0.entry(field.to_string()).or_insert(message);
        }
    }

    /// Message for `field`, if it failed validation.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Remove the entry for `field`, if any.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FormErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
