//! Sink adapter producing an [`image::GrayImage`].

use image::GrayImage;

use crate::error::SinkError;
use crate::sink::ImageSink;

/// Collects rendered rows into a [`GrayImage`] buffer.
#[derive(Debug, Default)]
pub struct GrayImageSink {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl GrayImageSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageSink for GrayImageSink {
    type Output = GrayImage;

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

    fn finish(self) -> Result<GrayImage, SinkError> {
        GrayImage::from_raw(self.width, self.height, self.samples).ok_or(SinkError::Other(
            "row count does not match the declared image height",
        ))
    }
}
