//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Day to run
    pub day: u8,
    /// File the puzzle input is read from
    pub input_path: PathBuf,
    /// Part filter (None = both parts)
    pub part: Option<u8>,
    /// Quiet mode
    pub quiet: bool,
    /// Print durations after the answers
    pub timings: bool,
    /// Most verbose level written to stderr
    pub log_level: Level,
}

impl Config {
    /// Build config from CLI args, resolving the input path
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_path = match args.input {
            Some(path) => expand_tilde(&path)?,
            None => default_input_path(&expand_tilde(&args.input_dir)?, args.day),
        };

        Ok(Config {
            day: args.day,
            input_path,
            part: args.part,
            quiet: args.quiet,
            timings: args.timings,
            log_level: log_level(args.verbose),
        })
    }
}

/// `<dir>/dayDD.txt`
pub fn default_input_path(dir: &Path, day: u8) -> PathBuf {
    dir.join(format!("day{day:02}.txt"))
}

/// Map the `-v` count onto a level; warnings are always shown
pub fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> Result<PathBuf, CliError> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    let rest = match path_str.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => return Ok(path.to_path_buf()),
    };

    let home = dirs::home_dir().ok_or_else(|| {
        CliError::Config(format!("cannot expand {path_str}: no home directory"))
    })?;
    Ok(home.join(rest))
}
