//! Compact bar-pattern storage and fixed-width bit expansion.

use core::iter;

use crate::error::RenderError;

/// Bar-pattern width of every codeword except the last of a line.
pub const CODEWORD_BITS: u8 = 17;
/// Bar-pattern width of the stop pattern (the last codeword of each line).
pub const STOP_BITS: u8 = 18;

/// A bar pattern packed into a single `u32`: the pattern bits in the upper
/// 24 bits, its bit count in the lower 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitfield(u32);

impl Bitfield {
    pub const fn new(bits: u32, count: u8) -> Self {
        debug_assert!(count <= 24, "count is too big");

        Self((bits << 8) | count as u32)
    }

    /// Expands `value` to exactly `width` binary digits, MSB first,
    /// zero-padded on the left. Fails when the natural representation of
    /// `value` is wider than `width`; the pattern is never truncated.
    pub fn expand(value: u32, width: u8) -> Result<Self, RenderError> {
        debug_assert!(width <= 24, "width is too big");

        if value >> width != 0 {
            return Err(RenderError::CodewordOverflow { value, width });
        }

        Ok(Self::new(value, width))
    }

    /// The pattern of an absent codeword: 17 zero bits, whatever column the
    /// codeword sits in. An absent stop pattern therefore comes out one bit
    /// narrower than its slot; [`Grid::new`](crate::Grid::new) rejects grids
    /// that would hit this.
    pub const fn absent() -> Self {
        Self::new(0, CODEWORD_BITS)
    }

    #[inline]
    pub const fn size(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0 >> 8
    }

    #[inline]
    pub const fn as_pair(&self) -> (u32, u32) {
        (self.0 >> 8, self.0 & 0xFF)
    }
}

impl iter::IntoIterator for Bitfield {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        let (value, count) = self.as_pair();
        Bits { value, count }
    }
}

/// MSB-first iterator over the bits of a [`Bitfield`].
pub struct Bits {
    value: u32,
    count: u32,
}

impl iter::Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count == 0 {
            return None;
        }

        self.count -= 1;
        Some((self.value >> self.count) & 1 != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::ExactSizeIterator for Bits {}
impl iter::FusedIterator for Bits {}
