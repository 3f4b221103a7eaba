//! Day 6: cephalopod math worksheet

use aoc_solver::{AocParser, ParseError, SolveError};

pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

impl Operator {
    fn apply(self, values: &[u64]) -> u64 {
        match self {
            Operator::Add => values.iter().sum(),
            Operator::Multiply => values.iter().product(),
        }
    }
}

/// One column group of the worksheet, read both ways
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operator: Operator,
    by_row: Vec<u64>,
    by_column: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Problem>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<(usize, &str)> = input
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();
        let Some(((operator_index, operator_line), rows)) = lines.split_last() else {
            return Err(ParseError::MissingData("empty worksheet".to_string()));
        };
        if rows.is_empty() {
            return Err(ParseError::MissingData("no number rows".to_string()));
        }

        for (index, row) in rows {
            if let Some(bad) = row.chars().find(|c| !c.is_ascii_digit() && *c != ' ') {
                return Err(ParseError::invalid_line(
                    *index,
                    row,
                    format!("unexpected character {bad:?}"),
                ));
            }
        }

        let mut groups = Vec::new();
        for (column, symbol) in operator_line.char_indices() {
            let operator = match symbol {
                ' ' => continue,
                '+' => Operator::Add,
                '*' => Operator::Multiply,
                other => {
                    return Err(ParseError::invalid_line(
                        *operator_index,
                        operator_line,
                        format!("unknown operator {other:?}"),
                    ));
                }
            };
            groups.push((column, operator));
        }

        let width = rows.iter().map(|(_, row)| row.len()).max().unwrap_or(0);
        let rows: Vec<&[u8]> = rows.iter().map(|(_, row)| row.as_bytes()).collect();

        let mut problems = Vec::with_capacity(groups.len());
        for (i, &(start, operator)) in groups.iter().enumerate() {
            let end = groups.get(i + 1).map_or(width, |&(next, _)| next.saturating_sub(1));
            let problem = Problem {
                operator,
                by_row: rows.iter().filter_map(|row| read_digits(row, start..end)).collect(),
                by_column: (start..end)
                    .filter_map(|column| read_digits_down(&rows, column))
                    .collect(),
            };
            if problem.by_row.is_empty() {
                return Err(ParseError::InvalidFormat(format!(
                    "empty number group at column {}",
                    start + 1
                )));
            }
            problems.push(problem);
        }

        tracing::debug!(problems = problems.len());
        Ok(problems)
    }
}

/// Digits of `row` within `columns`, ignoring spaces; `None` if there are none
fn read_digits(row: &[u8], columns: std::ops::Range<usize>) -> Option<u64> {
    let end = columns.end.min(row.len());
    let start = columns.start.min(end);
    fold_digits(row[start..end].iter().copied())
}

fn read_digits_down(rows: &[&[u8]], column: usize) -> Option<u64> {
    fold_digits(rows.iter().filter_map(|row| row.get(column).copied()))
}

fn fold_digits(bytes: impl Iterator<Item = u8>) -> Option<u64> {
    bytes
        .filter(u8::is_ascii_digit)
        .fold(None, |acc, b| Some(acc.unwrap_or(0) * 10 + u64::from(b - b'0')))
}

impl aoc_solver::Solver for Solver {
    #[tracing::instrument(skip_all)]
    fn part_1(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|p| p.operator.apply(&p.by_row)).sum();
        Ok(total.to_string())
    }

    #[tracing::instrument(skip_all)]
    fn part_2(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|p| p.operator.apply(&p.by_column)).sum();
        Ok(total.to_string())
    }
}
