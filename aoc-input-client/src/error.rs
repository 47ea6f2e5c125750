//! Error types for the AOC input client

use std::time::Duration;
use thiserror::Error;

/// Errors produced while validating a puzzle year/day pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleIdError {
    /// Year is not an integer
    #[error("Invalid year argument: {0}")]
    InvalidYear(String),

    /// Year is outside the supported event range
    #[error("Year must be between {min} and {max}")]
    YearOutOfRange { min: u16, max: u16 },

    /// Day is not an integer
    #[error("Invalid day argument: {0}")]
    InvalidDay(String),

    /// Day is outside 1..=25
    #[error("Day must be between {min} and {max}")]
    DayOutOfRange { min: u8, max: u8 },
}

/// Errors that can occur while fetching a puzzle input
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request did not complete within the client timeout
    #[error("The request exceeded time out of {:.1} seconds", .timeout.as_secs_f64())]
    Timeout {
        /// The timeout the client was configured with
        timeout: Duration,
    },

    /// HTTP request failed for any reason other than a timeout
    #[error("Failed to make a request: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered 400, which it does for stale session cookies
    #[error("AOC_SESSION is expired")]
    SessionExpired,

    /// Server answered 404, the puzzle is not unlocked yet
    #[error("Required input not found. The puzzle may not be available yet.")]
    NotFound,

    /// Any other non-200 status
    #[error("Unexpected status code: {}", .status.as_u16())]
    UnexpectedStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Session cookie is empty or cannot be sent as a header
    #[error("Invalid session cookie format")]
    InvalidSession,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
