use std::fmt;
use std::path::Path;
use tokio::fs;

use crate::error::{Result, SolverError};

/// Immutable rectangular board of characters, stored row-major.
///
/// Out-of-range coordinates passed to `char_at` are clamped into range, row and
/// column independently, in every build. Use [`Grid::get`] when an out-of-range
/// lookup should be visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Parse a grid from line-oriented text.
    ///
    /// Each non-blank line is one row. Whitespace within a line is ignored and every
    /// other character becomes a cell. Rows of differing length are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::new();

        for line in text.lines() {
            let before = cells.len();
            cells.extend(line.chars().filter(|c| !c.is_whitespace()));
            let found = cells.len() - before;

            if found == 0 {
                continue;
            }
            if rows == 0 {
                cols = found;
            } else if found != cols {
                return Err(SolverError::RaggedGrid {
                    row: rows,
                    expected: cols,
                    found,
                });
            }
            rows += 1;
        }

        Ok(Self { rows, cols, cells })
    }

    /// Load a grid from a text file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| SolverError::InputUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        let grid = Self::parse(&content)?;
        if grid.is_empty() {
            tracing::warn!("Grid file {:?} has no cells", path);
        }
        tracing::info!("Loaded {}x{} grid", grid.rows, grid.cols);
        tracing::debug!("Grid:\n{}", grid);

        Ok(grid)
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Row-major cell index, clamping both coordinates into range.
    ///
    /// Panics on an empty grid, which has no cell to clamp to. Callers outside
    /// the crate use [`Grid::get`], which is total.
    pub(crate) fn index(&self, row: isize, col: isize) -> usize {
        let row = row.clamp(0, self.rows as isize - 1) as usize;
        let col = col.clamp(0, self.cols as isize - 1) as usize;
        row * self.cols + col
    }

    /// Character at `(row, col)`, with out-of-range coordinates clamped.
    /// Panics on an empty grid, like [`Grid::index`].
    pub(crate) fn char_at(&self, row: isize, col: isize) -> char {
        self.cells[self.index(row, col)]
    }

    /// Character at `(row, col)`, or `None` when out of range
    #[allow(dead_code)]
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        self.in_bounds(row, col)
            .then(|| self.cells[row as usize * self.cols + col as usize])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "p w y r\ne n t h\ng s i q\no l s a\n";

    #[test]
    fn test_parse_two_by_two() {
        let grid = Grid::parse("AB\nCD\n").unwrap();
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.char_at(0, 0), 'A');
        assert_eq!(grid.char_at(0, 1), 'B');
        assert_eq!(grid.char_at(1, 0), 'C');
        assert_eq!(grid.char_at(1, 1), 'D');
    }

    #[test]
    fn test_parse_skips_whitespace() {
        let grid = Grid::parse(BOARD).unwrap();
        assert_eq!(grid.dimensions(), (4, 4));
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.char_at(2, 3), 'q');
        assert_eq!(grid.char_at(3, 0), 'o');
    }

    #[test]
    fn test_parse_non_square() {
        let grid = Grid::parse("abc\r\ndef\n\n").unwrap();
        assert_eq!(grid.dimensions(), (2, 3));
        assert_eq!(grid.char_at(1, 2), 'f');
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::parse("abcd\nab\n").unwrap_err();
        assert!(matches!(
            err,
            SolverError::RaggedGrid {
                row: 1,
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        let grid = Grid::parse("").unwrap();
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(grid.is_empty());
        assert!(!grid.in_bounds(0, 0));
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.to_string(), "");
    }

    #[test]
    #[should_panic]
    fn test_clamped_access_on_empty_grid_panics() {
        let grid = Grid::parse("\n\n").unwrap();
        grid.char_at(0, 0);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::parse(BOARD).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 3));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(0, 4));
        assert!(!grid.in_bounds(4, 0));
    }

    #[test]
    fn test_out_of_range_clamps() {
        let grid = Grid::parse(BOARD).unwrap();
        assert_eq!(grid.char_at(-1, 5), grid.char_at(0, 3));
        assert_eq!(grid.char_at(9, -3), grid.char_at(3, 0));
        assert_eq!(grid.get(-1, 5), None);
        assert_eq!(grid.get(1, 2), Some('t'));
    }

    #[test]
    fn test_clamp_uses_row_count_for_rows() {
        let grid = Grid::parse("ab\ncd\nef\n").unwrap();
        assert_eq!(grid.char_at(7, 0), 'e');
        assert_eq!(grid.char_at(0, 7), 'b');
    }

    #[test]
    fn test_display() {
        let grid = Grid::parse("AB\nCD\n").unwrap();
        assert_eq!(grid.to_string(), "A B \nC D \n");
    }
}
