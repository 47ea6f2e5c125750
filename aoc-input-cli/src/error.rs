//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Every variant is terminal; `main` prints it and exits with status 1.
#[derive(Error, Debug)]
pub enum CliError {
    /// Year or day failed validation
    #[error(transparent)]
    Puzzle(#[from] aoc_input_client::PuzzleIdError),

    /// Session cookie not provided
    #[error("AOC_SESSION not found in environment variables.")]
    MissingSession,

    /// Request failed or the server refused it
    #[error(transparent)]
    Fetch(#[from] aoc_input_client::FetchError),

    /// Output file could not be created
    #[error("Failed to create input file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying the body into the output file failed
    #[error("Failed to write response to input file {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
