//! AOC Input Client Library
//!
//! Downloads a single Advent of Code puzzle input for a given year and day,
//! authenticated with the user's session cookie.
//!
//! # Features
//!
//! - Validated puzzle identifiers (`PuzzleId`) with a clock-derived latest year
//! - One timed GET per fetch, 10 seconds by default
//! - Status classification: expired session, missing puzzle, anything else
//! - Streaming response handle, so the body can be copied straight to disk
//! - Secure TLS using rustls (no OpenSSL dependencies)
//!
//! # Example
//!
//! ```no_run
//! use aoc_input_client::{InputClient, PuzzleId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = InputClient::new()?;
//! let puzzle = PuzzleId::new(2024, 1)?;
//!
//! let mut response = client.fetch_input(puzzle, "your_session_cookie_here")?;
//! let mut file = std::fs::File::create("aoc_2024_1.txt")?;
//! let bytes = response.copy_to(&mut file)?;
//! println!("Wrote {} bytes", bytes);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod puzzle;

pub use client::{DEFAULT_TIMEOUT, InputClient, InputClientBuilder, InputResponse, InputStatus};
pub use error::{FetchError, PuzzleIdError};
pub use puzzle::{PuzzleId, latest_event_year, latest_event_year_at};
