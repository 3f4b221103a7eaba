//! Line-oriented parsing helpers shared by the solutions

use anyhow::Context;
use aoc_solver::ParseError;
use std::str::FromStr;

/// Parse every non-blank line with `parse_line`.
///
/// Lines are trimmed before being handed over. A failure is reported as
/// [`ParseError::InvalidLine`] carrying the 1-based line number, the raw line
/// and the full `anyhow` context chain.
pub fn parse_lines<T, F>(input: &str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line.trim())
                .map_err(|e| ParseError::invalid_line(index, line, format!("{e:#}")))
        })
        .collect()
}

/// Parse a (trimmed) decimal number
pub fn number<T>(text: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let text = text.trim();
    text.parse::<T>()
        .with_context(|| format!("{text:?} is not a valid number"))
}

/// Parse `text` as exactly `N` numbers separated by `separator`
pub fn numbers<T, const N: usize>(text: &str, separator: char) -> anyhow::Result<[T; N]>
where
    T: FromStr + Copy + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut values = [T::default(); N];
    let mut count = 0;
    for field in text.split(separator) {
        if count == N {
            anyhow::bail!("expected {N} fields separated by {separator:?}, found more");
        }
        values[count] = number(field)?;
        count += 1;
    }
    if count != N {
        anyhow::bail!("expected {N} fields separated by {separator:?}, found {count}");
    }
    Ok(values)
}

/// Split `text` around the first `separator`, failing with a readable message
pub fn split_once<'a>(text: &'a str, separator: &str) -> anyhow::Result<(&'a str, &'a str)> {
    text.split_once(separator)
        .with_context(|| format!("missing {separator:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_reports_line_number() {
        let err = parse_lines("1\n\n2\nx\n", |line| number::<u32>(line)).unwrap_err();
        match err {
            ParseError::InvalidLine { line, content, reason } => {
                assert_eq!(line, 4);
                assert_eq!(content, "x");
                assert!(reason.contains("\"x\" is not a valid number"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_lines_skips_blank_and_trims() {
        let values = parse_lines("  1 \r\n\n 22\n", |line| number::<u32>(line)).unwrap();
        assert_eq!(values, vec![1, 22]);
    }

    #[test]
    fn test_numbers_exact_count() {
        assert_eq!(numbers::<i64, 3>("1,-2,3", ',').unwrap(), [1, -2, 3]);
        assert!(numbers::<i64, 3>("1,2", ',').is_err());
        assert!(numbers::<i64, 3>("1,2,3,4", ',').is_err());
        assert!(numbers::<i64, 2>("1,a", ',').is_err());
    }

    #[test]
    fn test_split_once() {
        assert_eq!(split_once("a: b c", ": ").unwrap(), ("a", "b c"));
        assert!(split_once("a b", ": ").is_err());
    }
}
