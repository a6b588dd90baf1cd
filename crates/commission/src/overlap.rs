use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Closed `[start, end]` period.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimePair {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateTimePair {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &DateTimePair) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// `true` if any period of `first` intersects any period of `second`.
/// Touching endpoints count as an intersection.
pub fn has_overlap(first: &[DateTimePair], second: &[DateTimePair]) -> bool {
    first
        .iter()
        .any(|a| second.iter().any(|b| a.overlaps(b)))
}
