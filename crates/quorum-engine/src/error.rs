//! Error types for quorum-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuorumError {
    #[error("Invalid bracket: start {start} is after end {end}")]
    InvalidBracket {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

pub type Result<T> = std::result::Result<T, QuorumError>;
