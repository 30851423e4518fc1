//! Tests for overlap-count ranking and the shortlist rules.

use chrono::{TimeZone, Utc};
use quorum_engine::{
    rank, rank_scored, rank_with_limit, AttendeeAvailability, EventAvailability, TimeBracket,
    SHORTLIST_LIMIT,
};

/// Helper to create a TimeBracket from hour:minute ranges on a given day.
fn bracket(day: u32, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeBracket {
    TimeBracket {
        start: Utc
            .with_ymd_and_hms(2024, 1, day, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(2024, 1, day, end_hour, end_min, 0)
            .unwrap(),
    }
}

/// Helper to wrap per-attendee bracket lists into an EventAvailability.
fn submissions(attendees: Vec<Vec<TimeBracket>>) -> EventAvailability {
    EventAvailability {
        attendee_availability: attendees
            .into_iter()
            .map(|availability| AttendeeAvailability { availability })
            .collect(),
    }
}

#[test]
fn unanimous_bracket_collapses_to_a_single_candidate() {
    // Three attendees all submit the same window.
    let window = bracket(8, 9, 0, 10, 0);
    let event = submissions(vec![vec![window], vec![window], vec![window]]);

    let scored = rank_scored(&event);
    assert_eq!(scored.len(), 1, "identical submissions collapse to one");
    assert_eq!(scored[0].bracket, window);
    assert_eq!(
        scored[0].overlaps, 3,
        "each copy overlaps all three submissions"
    );

    assert_eq!(rank(&event), vec![window]);
}

#[test]
fn disjoint_brackets_each_score_one() {
    let morning = bracket(8, 9, 0, 10, 0);
    let afternoon = bracket(8, 14, 0, 15, 0);
    let event = submissions(vec![vec![morning], vec![afternoon]]);

    let scored = rank_scored(&event);
    assert_eq!(scored.len(), 2);
    assert!(
        scored.iter().all(|s| s.overlaps == 1),
        "a bracket overlapping nothing else still overlaps itself"
    );
    assert_eq!(rank(&event), vec![morning, afternoon]);
}

#[test]
fn higher_overlap_count_ranks_first() {
    // Attendee 1: 09:00-11:00 and 14:00-16:00
    // Attendee 2: 10:00-12:00 and 15:00-17:00
    // Attendee 3: 10:30-11:30 and a lone bracket the next day
    let a = bracket(8, 9, 0, 11, 0); // overlaps a, c, e        → 3
    let b = bracket(8, 14, 0, 16, 0); // overlaps b, d           → 2
    let c = bracket(8, 10, 0, 12, 0); // overlaps c, a, e        → 3
    let d = bracket(8, 15, 0, 17, 0); // overlaps d, b           → 2
    let e = bracket(8, 10, 30, 11, 30); // overlaps e, a, c      → 3
    let f = bracket(9, 9, 0, 10, 0); // overlaps only itself     → 1
    let event = submissions(vec![vec![a, b], vec![c, d], vec![e, f]]);

    let scored = rank_scored(&event);
    let counts: Vec<usize> = scored.iter().map(|s| s.overlaps).collect();
    assert_eq!(counts, vec![3, 3, 3, 2, 2, 1], "scores must be descending");

    let order: Vec<TimeBracket> = scored.iter().map(|s| s.bracket).collect();
    assert_eq!(
        order,
        vec![a, c, e, b, d, f],
        "equal scores keep submission order"
    );

    // The shortlist keeps the best five and drops the loner.
    assert_eq!(rank(&event), vec![a, c, e, b, d]);
}

#[test]
fn tied_scores_keep_submission_order() {
    let first = bracket(8, 9, 0, 10, 0);
    let second = bracket(9, 9, 0, 10, 0);

    let forward = rank(&submissions(vec![vec![first], vec![second]]));
    assert_eq!(forward, vec![first, second]);

    let reversed = rank(&submissions(vec![vec![second], vec![first]]));
    assert_eq!(reversed, vec![second, first]);
}

#[test]
fn shortlist_is_capped() {
    // Seven disjoint brackets, one per attendee, all scoring 1.
    let brackets: Vec<TimeBracket> = (8..15).map(|day| bracket(day, 9, 0, 10, 0)).collect();
    let event = submissions(brackets.iter().map(|b| vec![*b]).collect());

    let top = rank(&event);
    assert_eq!(top.len(), SHORTLIST_LIMIT);
    assert_eq!(
        top,
        brackets[..SHORTLIST_LIMIT],
        "ties resolve to the earliest submissions"
    );
}

#[test]
fn rank_with_limit_controls_shortlist_size() {
    let brackets: Vec<TimeBracket> = (8..15).map(|day| bracket(day, 9, 0, 10, 0)).collect();
    let event = submissions(brackets.iter().map(|b| vec![*b]).collect());

    assert_eq!(rank_with_limit(&event, 2), brackets[..2]);
    assert_eq!(rank_with_limit(&event, 0), vec![]);
    assert_eq!(
        rank_with_limit(&event, 100),
        brackets,
        "a limit beyond the candidate count returns everything"
    );
}

#[test]
fn empty_submissions_produce_empty_shortlist() {
    let no_attendees = submissions(vec![]);
    assert!(rank(&no_attendees).is_empty());

    let attendees_without_brackets = submissions(vec![vec![], vec![]]);
    assert!(rank(&attendees_without_brackets).is_empty());
}

#[test]
fn touching_brackets_score_as_overlapping() {
    // Closed intervals: 10:00 is shared by both windows.
    let a = bracket(8, 9, 0, 10, 0);
    let b = bracket(8, 10, 0, 11, 0);
    let event = submissions(vec![vec![a], vec![b]]);

    let scored = rank_scored(&event);
    assert!(
        scored.iter().all(|s| s.overlaps == 2),
        "touching endpoints count toward the score"
    );
}

#[test]
fn overlapping_but_distinct_brackets_both_survive() {
    // Same start, different ends: these overlap but are not duplicates.
    let short = bracket(8, 9, 0, 10, 0);
    let long = bracket(8, 9, 0, 11, 0);
    let event = submissions(vec![vec![short], vec![long]]);

    let top = rank(&event);
    assert_eq!(top.len(), 2, "only exact duplicates collapse");
    assert_eq!(top, vec![short, long]);
}

#[test]
fn duplicates_within_one_attendee_still_collapse() {
    // One attendee pasting the same window twice should not double it up
    // in the shortlist, but both copies count toward the score.
    let window = bracket(8, 9, 0, 10, 0);
    let event = submissions(vec![vec![window, window]]);

    let scored = rank_scored(&event);
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].overlaps, 2);
}
