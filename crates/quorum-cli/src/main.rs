//! `quorum` CLI — rank availability submissions and split event forms from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Rank submitted brackets (stdin → stdout)
//! cat availability.json | quorum rank
//!
//! # Rank from file to file, keeping overlap counts in the output
//! quorum rank -i availability.json -o shortlist.json --scores
//!
//! # Widen the shortlist beyond the default five
//! quorum rank -i availability.json --limit 10
//!
//! # Split a multi-day event form into per-day brackets
//! quorum split --start 2024-01-01T00:00:00Z --end 2024-01-03T00:00:00Z
//!
//! # Validate a submission before storing it
//! quorum check -i availability.json
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{Parser, Subcommand};
use quorum_engine::{
    rank_scored, rank_with_limit, split_into_days, EventAvailability, TimeBracket,
    SHORTLIST_LIMIT,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "quorum",
    version,
    about = "Availability-overlap scheduling for group events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank submitted brackets by attendee overlap
    Rank {
        /// Input availability JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Maximum number of brackets in the shortlist
        #[arg(long, default_value_t = SHORTLIST_LIMIT)]
        limit: usize,
        /// Include overlap counts in the output
        #[arg(long)]
        scores: bool,
    },
    /// Split a multi-day span into one bracket per calendar day
    Split {
        /// Span start, RFC 3339 or naive (e.g. 2024-01-01T09:00:00Z)
        #[arg(long)]
        start: String,
        /// Span end, RFC 3339 or naive (e.g. 2024-01-03T17:00:00Z)
        #[arg(long)]
        end: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate an availability submission
    Check {
        /// Input availability JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            input,
            output,
            limit,
            scores,
        } => {
            let raw = read_input(input.as_deref())?;
            let availability: EventAvailability =
                serde_json::from_str(&raw).context("Failed to parse availability JSON")?;

            let rendered = if scores {
                let mut scored = rank_scored(&availability);
                scored.truncate(limit);
                serde_json::to_string_pretty(&scored)?
            } else {
                serde_json::to_string_pretty(&rank_with_limit(&availability, limit))?
            };

            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Split { start, end, output } => {
            let start = parse_instant(&start)?;
            let end = parse_instant(&end)?;

            let brackets = split_into_days(start, end);
            let rendered = serde_json::to_string_pretty(&brackets)?;

            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let raw = read_input(input.as_deref())?;
            let availability: EventAvailability =
                serde_json::from_str(&raw).context("Failed to parse availability JSON")?;

            let issues = collect_issues(&availability);
            for issue in &issues {
                println!("{}", issue);
            }

            let attendees = availability.attendee_availability.len();
            if !issues.is_empty() {
                anyhow::bail!(
                    "{} problem(s) across {} attendee(s)",
                    issues.len(),
                    attendees
                );
            }

            let brackets: usize = availability
                .attendee_availability
                .iter()
                .map(|a| a.availability.len())
                .sum();
            println!("OK: {} attendee(s), {} bracket(s)", attendees, brackets);
        }
    }

    Ok(())
}

/// Collect human-readable problems with a submission.
///
/// Ranking itself accepts anything; this is the upstream gate. It flags
/// brackets whose start is after their end, and brackets within one
/// attendee's list that overlap each other.
fn collect_issues(availability: &EventAvailability) -> Vec<String> {
    let mut issues = Vec::new();

    for (who, attendee) in availability.attendee_availability.iter().enumerate() {
        let brackets = &attendee.availability;

        for (i, bracket) in brackets.iter().enumerate() {
            if let Err(err) = TimeBracket::checked(bracket.start, bracket.end) {
                issues.push(format!("attendee {}, bracket {}: {}", who + 1, i + 1, err));
            }
        }

        for i in 0..brackets.len() {
            for j in (i + 1)..brackets.len() {
                if brackets[i].overlaps(&brackets[j]) {
                    issues.push(format!(
                        "attendee {}: brackets {} and {} overlap each other",
                        who + 1,
                        i + 1,
                        j + 1
                    ));
                }
            }
        }
    }

    issues
}

/// Parse an instant from RFC 3339, falling back to a naive datetime
/// (`2024-01-01T09:00:00`) interpreted as UTC.
fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .with_context(|| format!("Failed to parse datetime: {}", raw))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
