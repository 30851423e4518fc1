//! WASM bindings for quorum-engine.
//!
//! Exposes overlap ranking, day splitting, and the overlap predicate to
//! JavaScript via `wasm-bindgen`. All complex types are passed as JSON
//! strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p quorum-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/quorum-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/quorum_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use quorum_engine::{AttendeeAvailability, EventAvailability, TimeBracket, SHORTLIST_LIMIT};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct TimeBracketDto {
    start: String,
    end: String,
}

impl From<&TimeBracket> for TimeBracketDto {
    fn from(b: &TimeBracket) -> Self {
        Self {
            start: b.start.to_rfc3339(),
            end: b.end.to_rfc3339(),
        }
    }
}

/// Input format for brackets passed from JavaScript.
#[derive(Deserialize)]
struct BracketInput {
    start: String,
    end: String,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs into engine types
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-01-08T09:00:00+00:00")
/// and naive local time (e.g., "2024-01-08T09:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    // Try RFC 3339 first (has timezone info).
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Fall back to naive datetime interpreted as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Parse and validate a single bracket. The engine itself accepts anything;
/// reversed brackets are rejected here at the boundary.
fn parse_bracket(input: &BracketInput) -> Result<TimeBracket, JsValue> {
    let start = parse_datetime(&input.start)?;
    let end = parse_datetime(&input.end)?;
    TimeBracket::checked(start, end).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a JSON array of per-attendee `[{start, end}, ...]` arrays into
/// an `EventAvailability`.
fn parse_availability_json(json: &str) -> Result<EventAvailability, JsValue> {
    let attendees: Vec<Vec<BracketInput>> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid availability JSON: {}", e)))?;

    let attendee_availability = attendees
        .into_iter()
        .map(|brackets| {
            let availability = brackets
                .iter()
                .map(parse_bracket)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AttendeeAvailability { availability })
        })
        .collect::<Result<Vec<_>, JsValue>>()?;

    Ok(EventAvailability {
        attendee_availability,
    })
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Rank submitted brackets by attendee overlap.
///
/// `availability_json` must be a JSON array with one entry per attendee, each
/// an array of `{start, end}` objects with ISO 8601 datetime strings. Returns
/// a JSON string containing the shortlisted `{start, end}` brackets, best
/// first. `limit` overrides the default shortlist size of five.
#[wasm_bindgen(js_name = "rankBrackets")]
pub fn rank_brackets(availability_json: &str, limit: Option<u32>) -> Result<String, JsValue> {
    let availability = parse_availability_json(availability_json)?;
    let limit = limit.map(|l| l as usize).unwrap_or(SHORTLIST_LIMIT);

    let shortlist = quorum_engine::rank_with_limit(&availability, limit);
    let dtos: Vec<TimeBracketDto> = shortlist.iter().map(TimeBracketDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Split a multi-day span into one bracket per calendar day.
///
/// `start` and `end` are ISO 8601 datetime strings. Returns a JSON string
/// containing an array of `{start, end}` brackets, one per calendar day
/// crossed by the span.
#[wasm_bindgen(js_name = "splitIntoDays")]
pub fn split_into_days(start: &str, end: &str) -> Result<String, JsValue> {
    let start = parse_datetime(start)?;
    let end = parse_datetime(end)?;

    let brackets = quorum_engine::split_into_days(start, end);
    let dtos: Vec<TimeBracketDto> = brackets.iter().map(TimeBracketDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether two brackets share at least one instant.
///
/// Both arguments must be single `{start, end}` JSON objects. Brackets are
/// closed intervals, so touching endpoints count as overlap.
#[wasm_bindgen(js_name = "bracketsOverlap")]
pub fn brackets_overlap(a_json: &str, b_json: &str) -> Result<bool, JsValue> {
    let a: BracketInput = serde_json::from_str(a_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bracket JSON: {}", e)))?;
    let b: BracketInput = serde_json::from_str(b_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bracket JSON: {}", e)))?;

    Ok(parse_bracket(&a)?.overlaps(&parse_bracket(&b)?))
}
