//! One fetch-and-save run

use crate::config::Config;
use crate::error::CliError;
use crate::output;
use aoc_input_client::InputClient;
use std::path::PathBuf;

/// Fetch the configured puzzle input and write it to the configured file
///
/// The output file is only touched once the server has answered 200.
pub fn run(config: &Config, client: &InputClient) -> Result<PathBuf, CliError> {
    let mut response = client.fetch_input(config.puzzle, &config.session)?;

    let announced = response.content_length();
    let bytes = output::write_input(&mut response, &config.output)?;
    if announced.is_some_and(|len| len != bytes) {
        tracing::warn!(announced = ?announced, bytes, "body length differs from Content-Length");
    }
    tracing::info!(
        puzzle = %config.puzzle,
        path = %config.output.display(),
        bytes,
        "puzzle input saved"
    );

    Ok(config.output.clone())
}
