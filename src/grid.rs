//! The caller-supplied codeword grid and its shape validation.

use crate::bits::{CODEWORD_BITS, STOP_BITS};
use crate::error::IrregularGrid;

/// One cell of the grid: a non-negative codeword value, or absent.
pub type Codeword = Option<u32>;

/// A validated, borrowed grid of codewords. Lines are rendered top to
/// bottom; within a line, codewords left to right. The grid is never
/// mutated and holds no state beyond the borrow.
#[derive(Debug, Clone, Copy)]
pub struct Grid<'a> {
    lines: &'a [Vec<Codeword>],
    cols: usize,
}

impl<'a> Grid<'a> {
    /// Wraps `lines` after checking the shape: at least one line, every
    /// line the same length, at least 2 columns, and no absent value in
    /// the stop-pattern column. Rejecting up front beats silently
    /// misrendering a symbol no scanner can read.
    pub fn new(lines: &'a [Vec<Codeword>]) -> Result<Self, IrregularGrid> {
        let first = lines.first().ok_or(IrregularGrid::Empty)?;
        let cols = first.len();
        if cols < 2 {
            return Err(IrregularGrid::TooNarrow(cols));
        }

        for (i, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(IrregularGrid::UnevenLine {
                    line: i,
                    got: line.len(),
                    expected: cols,
                });
            }
            if line[cols - 1].is_none() {
                return Err(IrregularGrid::AbsentStopPattern(i));
            }
        }

        Ok(Self { lines, cols })
    }

    /// Number of lines (symbol rows) in the grid.
    #[inline]
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of codewords per line.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total bar-pattern bits in one line: 17 per codeword, plus the stop
    /// pattern's extra bit.
    #[inline]
    pub const fn bits_per_line(&self) -> usize {
        (self.cols - 1) * CODEWORD_BITS as usize + STOP_BITS as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [Codeword]> + 'a {
        self.lines.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uniform_grid() {
        let lines = vec![vec![Some(1), Some(2), Some(3)], vec![None, Some(5), Some(6)]];
        let grid = Grid::new(&lines).unwrap();
        assert_eq!(grid.line_count(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.bits_per_line(), 2 * 17 + 18);
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(Grid::new(&[]).unwrap_err(), IrregularGrid::Empty);
    }

    #[test]
    fn rejects_narrow_lines() {
        let lines = vec![vec![Some(1)]];
        assert_eq!(Grid::new(&lines).unwrap_err(), IrregularGrid::TooNarrow(1));
    }

    #[test]
    fn rejects_uneven_lines() {
        let lines = vec![vec![Some(1), Some(2)], vec![Some(3), Some(4), Some(5)]];
        assert_eq!(
            Grid::new(&lines).unwrap_err(),
            IrregularGrid::UnevenLine {
                line: 1,
                got: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn rejects_absent_stop_pattern() {
        let lines = vec![vec![Some(1), Some(2)], vec![Some(3), None]];
        assert_eq!(
            Grid::new(&lines).unwrap_err(),
            IrregularGrid::AbsentStopPattern(1)
        );
    }
}
