//! Score and shortlist candidate brackets by attendee overlap.
//!
//! Every submitted bracket is scored by how many submitted brackets it
//! overlaps, itself included, then the highest-scoring distinct brackets are
//! returned. Scoring compares all pairs, so it is O(N²) in the total number
//! of submitted brackets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::bracket::{EventAvailability, TimeBracket};

/// Maximum number of brackets returned by [`rank`].
pub const SHORTLIST_LIMIT: usize = 5;

/// A candidate bracket together with its overlap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredBracket {
    /// The candidate window.
    pub bracket: TimeBracket,
    /// Number of submitted brackets this one overlaps, itself included.
    /// Never less than 1.
    pub overlaps: usize,
}

/// Rank all submitted brackets and return the best [`SHORTLIST_LIMIT`].
///
/// Flattens every attendee's brackets into one candidate list, scores each
/// candidate by the number of submitted brackets it overlaps (itself
/// included), and returns the highest-scoring distinct brackets, best first.
/// A window submitted by all of `k` attendees scores at least `k`, so
/// unanimous windows surface at the front.
///
/// Brackets with equal scores keep submission order, and a bracket submitted
/// several times appears once in the result.
pub fn rank(availability: &EventAvailability) -> Vec<TimeBracket> {
    rank_with_limit(availability, SHORTLIST_LIMIT)
}

/// Same as [`rank`] with a caller-chosen shortlist size.
pub fn rank_with_limit(availability: &EventAvailability, limit: usize) -> Vec<TimeBracket> {
    let mut scored = rank_scored(availability);
    scored.truncate(limit);
    scored.into_iter().map(|s| s.bracket).collect()
}

/// Score every submitted bracket and return all distinct (bracket, count)
/// pairs, best first, without truncating.
pub fn rank_scored(availability: &EventAvailability) -> Vec<ScoredBracket> {
    // Flatten all brackets from all attendees into a single candidate list.
    let candidates: Vec<TimeBracket> = availability
        .attendee_availability
        .iter()
        .flat_map(|a| a.availability.iter().copied())
        .collect();

    let mut scored: Vec<ScoredBracket> = candidates
        .iter()
        .map(|candidate| ScoredBracket {
            bracket: *candidate,
            overlaps: candidates.iter().filter(|b| candidate.overlaps(b)).count(),
        })
        .collect();

    // Identical (bracket, count) pairs collapse to their first occurrence.
    let mut seen = HashSet::new();
    scored.retain(|s| seen.insert((s.bracket, s.overlaps)));

    // Highest count first. The sort is stable, so equal counts keep
    // submission order.
    scored.sort_by(|a, b| b.overlaps.cmp(&a.overlaps));

    scored
}
