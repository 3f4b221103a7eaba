//! Output formatting for solver results

use crate::runner::{Answers, Report};
use chrono::TimeDelta;
use std::fmt::Write;

/// Output formatter for one run
pub struct OutputFormatter {
    quiet: bool,
    timings: bool,
}

impl OutputFormatter {
    pub fn new(quiet: bool, timings: bool) -> Self {
        Self { quiet, timings }
    }

    /// Print the rendered report to stdout
    pub fn print(&self, report: &Report) {
        print!("{}", self.render(report));
    }

    /// Render answers (and timings when enabled), newline terminated
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();

        if self.quiet {
            for result in report.results() {
                let _ = writeln!(out, "{}", result.answer);
            }
        } else {
            match &report.answers {
                Answers::Both(solution) => {
                    let _ = writeln!(out, "{solution}");
                }
                Answers::Single(result) => {
                    let _ = writeln!(out, "Day {}", report.day);
                    let _ = writeln!(out, "Part {}: {}", result.part, result.answer);
                }
            }
        }

        if self.timings {
            let _ = writeln!(out, "Parse: {}", format_duration(report.parse_duration));
            for result in report.results() {
                let _ = writeln!(
                    out,
                    "Part {} solve: {}",
                    result.part,
                    format_duration(result.duration())
                );
            }
        }
        out
    }
}

/// Format a TimeDelta for display
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
