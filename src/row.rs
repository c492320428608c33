//! Turning one grid line into one pixel row.

use core::iter;

use crate::bits::{Bitfield, CODEWORD_BITS, STOP_BITS};
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::grid::Codeword;

/// Iterator over a line's codewords, yielding one bar pattern per column.
/// The target width keys off the column index against the line length:
/// last column 18 bits, every other column 17. Absent codewords always
/// yield [`Bitfield::absent`].
#[derive(Clone)]
pub(crate) struct RowBits<'a> {
    line: &'a [Codeword],
    col: usize,
}

impl<'a> RowBits<'a> {
    pub(crate) fn new(line: &'a [Codeword]) -> Self {
        Self { line, col: 0 }
    }
}

impl iter::Iterator for RowBits<'_> {
    type Item = Result<Bitfield, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.col == self.line.len() {
            return None;
        }

        let width = if self.col == self.line.len() - 1 {
            STOP_BITS
        } else {
            CODEWORD_BITS
        };
        let field = match self.line[self.col] {
            None => Ok(Bitfield::absent()),
            Some(value) => Bitfield::expand(value, width),
        };

        self.col += 1;
        Some(field)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.line.len() - self.col;
        (count, Some(count))
    }
}

impl ExactSizeIterator for RowBits<'_> {}
impl iter::FusedIterator for RowBits<'_> {}

/// Builds the full-width pixel row for one grid line: quiet zone, every
/// bar pattern expanded to `bar_width` samples per bit, quiet zone. The
/// result length equals the computed image width by construction.
pub(crate) fn build_row(
    line: &[Codeword],
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderError> {
    let quiet = config.quiet_zone() as usize;
    let bar = config.bar_width() as usize;
    let mut row = Vec::with_capacity(2 * quiet + (line.len() * 17 + 1) * bar);

    row.extend(iter::repeat(config.white()).take(quiet));
    for field in RowBits::new(line) {
        for bit in field? {
            let sample = if bit { config.black() } else { config.white() };
            row.extend(iter::repeat(sample).take(bar));
        }
    }
    row.extend(iter::repeat(config.white()).take(quiet));

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn widths_follow_column_position() {
        let line = vec![Some(3), Some(3), Some(3)];
        let sizes: Vec<u8> = RowBits::new(&line)
            .map(|field| field.unwrap().size())
            .collect();
        assert_eq!(sizes, [17, 17, 18]);
    }

    #[test]
    fn absent_yields_17_bits_even_in_stop_position() {
        // Reproducible quirk kept from the reference behavior; grids with
        // an absent stop pattern are rejected before rendering instead.
        let line = vec![Some(1), None];
        let sizes: Vec<u8> = RowBits::new(&line)
            .map(|field| field.unwrap().size())
            .collect();
        assert_eq!(sizes, [17, 17]);
    }

    #[test]
    fn row_matches_reference_layout() {
        let lines = vec![vec![Some(3), Some(5)]];
        let grid = Grid::new(&lines).unwrap();
        let config = RenderConfig::new();
        let row = build_row(&lines[0], &config).unwrap();

        assert_eq!(row.len() as u32, config.image_width(&grid));

        // 10 quiet + 3 as 17 bits (15 zeros, 1, 1) at 5 px per bit.
        assert!(row[..10].iter().all(|&s| s == 255));
        assert!(row[10..85].iter().all(|&s| s == 255));
        assert!(row[85..95].iter().all(|&s| s == 0));
        // 5 as 18 bits: 15 zeros, then 1 0 1.
        assert!(row[95..170].iter().all(|&s| s == 255));
        assert!(row[170..175].iter().all(|&s| s == 0));
        assert!(row[175..180].iter().all(|&s| s == 255));
        assert!(row[180..185].iter().all(|&s| s == 0));
        assert!(row[185..].iter().all(|&s| s == 255));
    }

    #[test]
    fn custom_samples_are_used() {
        let line = vec![Some(0), Some(1)];
        let config = RenderConfig::new().set_bar_width(1).set_samples(7, 9);
        let row = build_row(&line, &config).unwrap();

        assert_eq!(row.len(), 2 + 17 + 18 + 2);
        assert_eq!(row[row.len() - 3], 7); // the stop pattern's lone bit
        assert!(row.iter().filter(|&&s| s == 7).count() == 1);
    }

    #[test]
    fn oversized_codeword_aborts_the_row() {
        let line = vec![Some(1 << 17), Some(1)];
        let err = build_row(&line, &RenderConfig::new()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::CodewordOverflow { width: 17, .. }
        ));
    }
}
