//! Configuration resolution from CLI args and the environment

use crate::cli::Args;
use crate::error::CliError;
use aoc_input_client::PuzzleId;
use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Environment variable holding the session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolved runtime configuration
pub struct Config {
    /// Puzzle to download
    pub puzzle: PuzzleId,
    /// Session key (zeroized on drop)
    pub session: Zeroizing<String>,
    /// Destination file
    pub output: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("puzzle", &self.puzzle)
            .field("session", &"<redacted>")
            .field("output", &self.output)
            .finish()
    }
}

impl Config {
    /// Build config from CLI args and the process environment
    pub fn from_env(args: Args) -> Result<Self, CliError> {
        let session = std::env::var(SESSION_ENV).ok().map(Zeroizing::new);
        Self::from_args(args, session, aoc_input_client::latest_event_year())
    }

    /// Build config from CLI args and an already-read session value
    ///
    /// Checks run in order: year, day, session. The first failure wins.
    pub fn from_args(
        args: Args,
        session: Option<Zeroizing<String>>,
        latest_year: u16,
    ) -> Result<Self, CliError> {
        let puzzle = PuzzleId::parse_with_latest_year(&args.year, &args.day, latest_year)?;

        let session = session
            .filter(|s| !s.is_empty())
            .ok_or(CliError::MissingSession)?;

        let output = args
            .output
            .unwrap_or_else(|| default_output_path(puzzle));

        Ok(Config {
            puzzle,
            session,
            output,
        })
    }
}

/// `aoc_<year>_<day>.txt` in the working directory
pub fn default_output_path(puzzle: PuzzleId) -> PathBuf {
    PathBuf::from(format!("aoc_{}_{}.txt", puzzle.year(), puzzle.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_input_client::PuzzleIdError;

    fn args(year: &str, day: &str, output: Option<&str>) -> Args {
        Args {
            year: year.to_string(),
            day: day.to_string(),
            output: output.map(PathBuf::from),
        }
    }

    fn session(value: &str) -> Option<Zeroizing<String>> {
        Some(Zeroizing::new(value.to_string()))
    }

    #[test]
    fn test_default_output_name() {
        let config = Config::from_args(args("2024", "3", None), session("abc"), 2024).unwrap();
        assert_eq!(config.output, PathBuf::from("aoc_2024_3.txt"));
        assert_eq!(config.puzzle.year(), 2024);
        assert_eq!(config.puzzle.day(), 3);
        assert_eq!(config.session.as_str(), "abc");
    }

    #[test]
    fn test_output_override() {
        let config =
            Config::from_args(args("2015", "25", Some("in/25.txt")), session("abc"), 2024).unwrap();
        assert_eq!(config.output, PathBuf::from("in/25.txt"));
    }

    #[test]
    fn test_debug_redacts_session() {
        let config =
            Config::from_args(args("2024", "3", None), session("53616c7465645f5f"), 2024).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("53616c7465645f5f"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("aoc_2024_3.txt"));
    }

    #[test]
    fn test_missing_session() {
        let err = Config::from_args(args("2024", "3", None), None, 2024).unwrap_err();
        assert!(matches!(err, CliError::MissingSession));
        assert_eq!(
            err.to_string(),
            "AOC_SESSION not found in environment variables."
        );
    }

    #[test]
    fn test_empty_session_is_missing() {
        let err = Config::from_args(args("2024", "3", None), session(""), 2024).unwrap_err();
        assert!(matches!(err, CliError::MissingSession));
    }

    #[test]
    fn test_argument_errors_take_precedence_over_session() {
        let err = Config::from_args(args("2024", "0", None), None, 2024).unwrap_err();
        assert!(matches!(
            err,
            CliError::Puzzle(PuzzleIdError::DayOutOfRange { .. })
        ));
        assert_eq!(err.to_string(), "Day must be between 1 and 25");
    }

    #[test]
    fn test_year_message_uses_latest_year() {
        let err = Config::from_args(args("2025", "1", None), session("abc"), 2024).unwrap_err();
        assert_eq!(err.to_string(), "Year must be between 2015 and 2024");

        let config = Config::from_args(args("2025", "1", None), session("abc"), 2025).unwrap();
        assert_eq!(config.puzzle.year(), 2025);
    }
}
