//! Rectangular character grids

use aoc_solver::ParseError;

/// The eight king-move offsets around a cell
pub const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// Parse one row per non-blank line, mapping each byte through `cell`.
    ///
    /// All rows must have the same width.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(u8) -> Option<T>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (index, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "row {} has width {}, expected {w}",
                        index + 1,
                        line.len()
                    )));
                }
                Some(_) => {}
            }
            for (column, byte) in line.bytes().enumerate() {
                let value = cell(byte).ok_or_else(|| {
                    ParseError::invalid_line(
                        index,
                        line,
                        format!("unexpected character {:?} at column {}", byte as char, column + 1),
                    )
                })?;
                cells.push(value);
            }
            height += 1;
        }

        Ok(Self {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    /// Build a grid of the same shape by mapping every cell
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        (row < self.height && column < self.width).then(|| &self.cells[row * self.width + column])
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.height && column < self.width {
            Some(&mut self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// All `(row, column)` positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |column| (row, column)))
    }

    /// In-bounds king-move neighbours of `(row, column)`
    pub fn neighbors_8(
        &self,
        row: usize,
        column: usize,
    ) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let (width, height) = (self.width, self.height);
        NEIGHBORS_8.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = column.checked_add_signed(dc)?;
            (r < height && c < width).then_some((r, c))
        })
    }
}
