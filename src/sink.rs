//! The image-sink boundary: where finished pixel rows leave the renderer.

use std::io;

use crate::error::SinkError;

/// Receives the rendered image row by row, strictly top to bottom.
///
/// The pixel model is fixed: single-channel, 8-bit grayscale. `open` is
/// called exactly once with the final image size before any row arrives;
/// every `push_row` slice has length `width`; `finish` is called exactly
/// once, only after every row was accepted. A failed render drops the
/// sink without finalizing it, since a partial image is meaningless.
pub trait ImageSink {
    type Output;

    fn open(&mut self, width: u32, height: u32) -> Result<(), SinkError>;

    fn push_row(&mut self, row: &[u8]) -> Result<(), SinkError>;

    fn finish(self) -> Result<Self::Output, SinkError>;
}

/// A finished in-memory grayscale image, row-major, one byte per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl Raster {
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let width = self.width as usize;
        &self.samples[y as usize * width..][..width]
    }
}

/// Sink accumulating rows into a [`Raster`]. This is the plain growable
/// buffer the single-threaded pipeline needs; there is nothing to
/// coordinate.
#[derive(Debug, Default)]
pub struct RasterSink {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl RasterSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageSink for RasterSink {
    type Output = Raster;

    fn open(&mut self, width: u32, height: u32) -> Result<(), SinkError> {
        self.width = width;
        self.height = height;
        self.samples = Vec::with_capacity(width as usize * height as usize);
        Ok(())
    }

    fn push_row(&mut self, row: &[u8]) -> Result<(), SinkError> {
        self.samples.extend_from_slice(row);
        Ok(())
    }

    fn finish(self) -> Result<Raster, SinkError> {
        if self.samples.len() != self.width as usize * self.height as usize {
            return Err(SinkError::Other(
                "row count does not match the declared image height",
            ));
        }

        Ok(Raster {
            width: self.width,
            height: self.height,
            samples: self.samples,
        })
    }
}

/// Sink streaming a binary PGM (P5) image into any writer. Rows are
/// written as they arrive; nothing is buffered beyond the writer's own
/// buffering.
#[derive(Debug)]
pub struct PgmSink<W: io::Write> {
    out: W,
}

impl<W: io::Write> PgmSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: io::Write> ImageSink for PgmSink<W> {
    type Output = W;

    fn open(&mut self, width: u32, height: u32) -> Result<(), SinkError> {
        write!(self.out, "P5\n{width} {height}\n255\n")?;
        Ok(())
    }

    fn push_row(&mut self, row: &[u8]) -> Result<(), SinkError> {
        self.out.write_all(row)?;
        Ok(())
    }

    fn finish(mut self) -> Result<W, SinkError> {
        self.out.flush()?;
        Ok(self.out)
    }
}
