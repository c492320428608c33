//! Rendering parameters and the pure image-geometry calculators.

use crate::grid::Grid;

/// Rendering parameters, built as defaults plus `set_*` overlays. Any
/// setter applied later wins over the default and over earlier setters.
///
/// The quiet zone is always twice the bar width and one grid line is
/// always `scale * bar_width` pixel rows tall, so neither is settable on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    bar_width: u32,
    scale: u32,
    black: u8,
    white: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// The reference configuration: 5-pixel modules at vertical scale 4,
    /// black 0, white 255.
    pub const fn new() -> Self {
        Self {
            bar_width: 5,
            scale: 4,
            black: 0,
            white: 255,
        }
    }

    /// Sets the module width in pixels (one bit of bar pattern).
    pub const fn set_bar_width(mut self, bar_width: u32) -> Self {
        assert!(bar_width > 0, "bar width must be at least 1 pixel");
        self.bar_width = bar_width;
        self
    }

    /// Sets the vertical repeat factor giving each line visible height.
    pub const fn set_scale(mut self, scale: u32) -> Self {
        assert!(scale > 0, "scale must be at least 1");
        self.scale = scale;
        self
    }

    /// Sets the grayscale sample values used for bars and background.
    pub const fn set_samples(mut self, black: u8, white: u8) -> Self {
        self.black = black;
        self.white = white;
        self
    }

    #[inline]
    pub const fn bar_width(&self) -> u32 {
        self.bar_width
    }

    #[inline]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub const fn black(&self) -> u8 {
        self.black
    }

    #[inline]
    pub const fn white(&self) -> u8 {
        self.white
    }

    /// Width of the blank margin surrounding the symbol, in pixels.
    #[inline]
    pub const fn quiet_zone(&self) -> u32 {
        self.bar_width * 2
    }

    /// Number of identical pixel rows emitted per grid line.
    #[inline]
    pub const fn row_repeat(&self) -> u32 {
        self.scale * self.bar_width
    }

    /// Image width in pixels: every bar of one line plus both quiet zones.
    pub fn image_width(&self, grid: &Grid<'_>) -> u32 {
        grid.bits_per_line() as u32 * self.bar_width + 2 * self.quiet_zone()
    }

    /// Image height in pixels: every line at its full visible height plus
    /// both quiet zones.
    pub fn image_height(&self, grid: &Grid<'_>) -> u32 {
        grid.line_count() as u32 * self.row_repeat() + 2 * self.quiet_zone()
    }
}
