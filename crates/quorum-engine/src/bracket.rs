//! Time bracket types and the interval-overlap predicate.
//!
//! Brackets are closed intervals: a bracket that ends exactly when another
//! starts DOES overlap it. A shared boundary instant still counts as common
//! availability, which is what the ranking layer cares about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuorumError, Result};

/// A single window of time an attendee is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBracket {
    /// Inclusive start of the window.
    pub start: DateTime<Utc>,
    /// Inclusive end of the window.
    pub end: DateTime<Utc>,
}

/// One attendee's submitted availability for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeeAvailability {
    /// The windows this attendee marked as free.
    pub availability: Vec<TimeBracket>,
}

/// All submitted availability for an event, one entry per attendee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAvailability {
    /// Per-attendee submissions, in submission order.
    pub attendee_availability: Vec<AttendeeAvailability>,
}

/// How one bracket lies relative to another.
///
/// Every pair of brackets falls into exactly one case, so
/// [`TimeBracket::relation_to`] classifies any two inputs without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketRelation {
    /// Ends strictly before the other begins.
    DisjointBefore,
    /// Begins strictly after the other ends.
    DisjointAfter,
    /// Begins before the other and ends inside it.
    OverlapsStart,
    /// Begins inside the other and extends past its end.
    OverlapsEnd,
    /// Lies entirely within the other (boundaries may touch).
    Inside,
    /// Encloses the other entirely (boundaries may touch).
    Contains,
    /// Identical start and end.
    Equal,
}

impl TimeBracket {
    /// Build a bracket, rejecting one whose start is after its end.
    ///
    /// The ranking and splitting functions never reject input themselves;
    /// this is for callers that validate submissions before storing them.
    ///
    /// # Errors
    /// Returns [`QuorumError::InvalidBracket`] if `start > end`.
    pub fn checked(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(QuorumError::InvalidBracket { start, end });
        }
        Ok(TimeBracket { start, end })
    }

    /// Classify this bracket's position relative to `other`.
    pub fn relation_to(&self, other: &TimeBracket) -> BracketRelation {
        if self.end < other.start {
            BracketRelation::DisjointBefore
        } else if self.start > other.end {
            BracketRelation::DisjointAfter
        } else if self.start == other.start && self.end == other.end {
            BracketRelation::Equal
        } else if self.start >= other.start && self.end <= other.end {
            BracketRelation::Inside
        } else if self.start <= other.start && self.end >= other.end {
            BracketRelation::Contains
        } else if self.start < other.start {
            // Not nested either way, so the ends must cross.
            BracketRelation::OverlapsStart
        } else {
            BracketRelation::OverlapsEnd
        }
    }

    /// Whether this bracket shares at least one instant with `other`.
    ///
    /// Closed-interval test: `[09:00, 10:00]` and `[10:00, 11:00]` overlap.
    pub fn overlaps(&self, other: &TimeBracket) -> bool {
        !matches!(
            self.relation_to(other),
            BracketRelation::DisjointBefore | BracketRelation::DisjointAfter
        )
    }
}
