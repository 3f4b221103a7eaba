//! AOC CLI - runs one Advent of Code 2025 day over a local input file

mod cli;
mod config;
mod error;
mod input;
mod output;
mod runner;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(config::log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    let registry = aoc_solutions::registry()?;
    let input = input::read_input(&config.input_path)?;
    let report = runner::run(&registry, &config, &input)?;

    OutputFormatter::new(config.quiet, config.timings).print(&report);
    Ok(())
}
