//! AOC Input CLI - download one Advent of Code puzzle input to a file

mod cli;
mod config;
mod download;
mod error;
mod logging;
mod output;

use aoc_input_client::InputClient;
use clap::Parser;
use cli::Args;
use config::Config;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    };

    logging::init_logging();

    let result = run(args);
    if let Err(e) = &result {
        tracing::debug!(error = ?e, "download failed");
    }

    let code = report(&result, &mut std::io::stdout(), &mut std::io::stderr());
    if code != 0 {
        std::process::exit(code);
    }
}

fn run(args: Args) -> Result<PathBuf, error::CliError> {
    // Validate everything before any network setup
    let config = Config::from_env(args)?;
    let client = InputClient::new()?;
    download::run(&config, &client)
}

/// Help and version go to stdout and are not failures
fn usage_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() { 1 } else { 0 }
}

/// Print the outcome of a run and return the process exit code
fn report(
    result: &Result<PathBuf, error::CliError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    match result {
        Ok(path) => {
            let _ = writeln!(out, "Successfully created {}", path.display());
            0
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error::CliError;

    fn report_to_strings(result: &Result<PathBuf, CliError>) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = report(result, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_success_prints_path_and_exits_zero() {
        let (code, out, err) = report_to_strings(&Ok(PathBuf::from("aoc_2024_1.txt")));
        assert_eq!(code, 0);
        assert_eq!(out, "Successfully created aoc_2024_1.txt\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_failure_prints_error_and_exits_one() {
        let (code, out, err) = report_to_strings(&Err(CliError::MissingSession));
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err, "Error: AOC_SESSION not found in environment variables.\n");
    }

    #[test]
    fn test_fetch_failure_exits_one() {
        let result = Err(CliError::Fetch(aoc_input_client::FetchError::NotFound));
        let (code, _, err) = report_to_strings(&result);
        assert_eq!(code, 1);
        assert!(err.starts_with("Error: Required input not found."));
    }

    #[test]
    fn test_usage_errors_exit_one() {
        let e = Args::try_parse_from(["aoc-input", "2024"]).unwrap_err();
        assert_eq!(usage_exit_code(&e), 1);

        let e = Args::try_parse_from(["aoc-input", "2024", "1", "2"]).unwrap_err();
        assert_eq!(usage_exit_code(&e), 1);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let e = Args::try_parse_from(["aoc-input", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&e), 0);

        let e = Args::try_parse_from(["aoc-input", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&e), 0);
    }
}
