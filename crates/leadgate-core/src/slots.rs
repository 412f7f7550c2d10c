//! Consultation time slot value object
//!
//! Bookings happen on a fixed 30-minute grid from 9:00 AM to 5:30 PM. The
//! wire format is the display label (e.g. `"2:30 PM"`), which is what the
//! scheduling backend stores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The bookable slot labels, in day order.
pub const TIME_SLOTS: [&str; 18] = [
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM",
    "5:00 PM", "5:30 PM",
];

/// A validated 30-minute consultation slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(usize);

impl TimeSlot {
    /// Parse a slot label. Only the exact labels in [`TIME_SLOTS`] are valid.
    pub fn parse(label: &str) -> Result<Self, TimeSlotError> {
        TIME_SLOTS
            .iter()
            .position(|slot| *slot == label.trim())
            .map(Self)
            .ok_or_else(|| TimeSlotError::Invalid(label.to_string()))
    }

    /// All slots in day order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TIME_SLOTS.len()).map(Self)
    }

    /// The slot's display/wire label.
    pub fn as_str(&self) -> &'static str {
        TIME_SLOTS[self.0]
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.as_str().to_string()
    }
}

/// Slot parsing failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimeSlotError {
    /// The label is not on the booking grid.
    #[error("'{0}' is not an available time slot")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_slots() {
        assert_eq!(TimeSlot::parse("9:00 AM").unwrap().as_str(), "9:00 AM");
        assert_eq!(TimeSlot::parse("5:30 PM").unwrap().as_str(), "5:30 PM");
        assert_eq!(TimeSlot::parse(" 2:30 PM ").unwrap().as_str(), "2:30 PM");
    }

    #[test]
    fn test_reject_off_grid_labels() {
        assert!(TimeSlot::parse("8:30 AM").is_err());
        assert!(TimeSlot::parse("6:00 PM").is_err());
        assert!(TimeSlot::parse("14:30").is_err());
        assert!(TimeSlot::parse("").is_err());
    }

    #[test]
    fn test_grid_covers_business_day() {
        let slots: Vec<_> = TimeSlot::all().collect();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.first().unwrap().as_str(), "9:00 AM");
        assert_eq!(slots.last().unwrap().as_str(), "5:30 PM");
    }

    #[test]
    fn test_serde_round_trips_label() {
        let slot = TimeSlot::parse("1:00 PM").unwrap();
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, "\"1:00 PM\"");
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
        assert!(serde_json::from_str::<TimeSlot>("\"25:00 PM\"").is_err());
    }
}
