//! Reading puzzle inputs from disk

use crate::error::CliError;
use std::fs;
use std::path::Path;

/// Read the whole input file into memory
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let input = fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = input.len(), "read input");
    Ok(input)
}
