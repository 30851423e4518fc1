//! # quorum-engine
//!
//! Availability-overlap scheduling for group events.
//!
//! Given every attendee's submitted time brackets, the engine scores each
//! bracket by how many submitted brackets it overlaps and shortlists the
//! best candidates. A day-splitting helper turns a multi-day event form
//! into the per-day brackets attendees respond to.
//!
//! ## Modules
//!
//! - [`bracket`] — time bracket types and the interval-overlap predicate
//! - [`ranker`] — score and shortlist brackets by attendee overlap
//! - [`day_split`] — decompose a multi-day span into per-day brackets
//! - [`error`] — error types
//!
//! ## Quick start
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use quorum_engine::{rank, AttendeeAvailability, EventAvailability, TimeBracket};
//!
//! let monday_morning = TimeBracket {
//!     start: Utc.with_ymd_and_hms(2024, 1, 8, 9, 0, 0).unwrap(),
//!     end: Utc.with_ymd_and_hms(2024, 1, 8, 11, 0, 0).unwrap(),
//! };
//!
//! let submissions = EventAvailability {
//!     attendee_availability: vec![
//!         AttendeeAvailability { availability: vec![monday_morning] },
//!         AttendeeAvailability { availability: vec![monday_morning] },
//!     ],
//! };
//!
//! // Both attendees offered the same window, so it is the sole candidate.
//! assert_eq!(rank(&submissions), vec![monday_morning]);
//! ```

pub mod bracket;
pub mod day_split;
pub mod error;
pub mod ranker;

pub use bracket::{AttendeeAvailability, BracketRelation, EventAvailability, TimeBracket};
pub use day_split::split_into_days;
pub use error::QuorumError;
pub use ranker::{rank, rank_scored, rank_with_limit, ScoredBracket, SHORTLIST_LIMIT};
