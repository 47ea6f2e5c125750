//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

// Year and day stay strings here; `Config` validates them so the error
// names the supported range.

/// Advent of Code input downloader
#[derive(Parser, Debug)]
#[command(
    name = "aoc-input",
    about = "Download an Advent of Code puzzle input",
    version,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Event year (2015 up to the latest event)
    pub year: String,

    /// Puzzle day (1-25)
    pub day: String,

    /// File to write the input to [default: aoc_<year>_<day>.txt]
    #[arg(short, long, value_name = "FILENAME")]
    pub output: Option<PathBuf>,
}
