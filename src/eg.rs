//! Sink adapter for `embedded-graphics` draw targets.

use embedded_graphics::{pixelcolor::Gray8, prelude::*, Pixel};

use crate::error::SinkError;
use crate::sink::ImageSink;

/// Pushes rendered rows into any grayscale [`DrawTarget`], pixel by pixel,
/// starting at `origin`. The target keeps the drawing; `finish` yields
/// nothing.
pub struct EgSink<'a, D> {
    target: &'a mut D,
    origin: Point,
    y: i32,
}

impl<'a, D: DrawTarget<Color = Gray8>> EgSink<'a, D> {
    pub fn new(target: &'a mut D) -> Self {
        Self::with_origin(target, Point::zero())
    }

    pub fn with_origin(target: &'a mut D, origin: Point) -> Self {
        Self { target, origin, y: 0 }
    }
}

impl<D: DrawTarget<Color = Gray8>> ImageSink for EgSink<'_, D> {
    type Output = ();

    fn open(&mut self, _width: u32, _height: u32) -> Result<(), SinkError> {
        Ok(())
    }

    fn push_row(&mut self, row: &[u8]) -> Result<(), SinkError> {
        let Point { x, y } = self.origin;
        let y = y + self.y;

        self.target
            .draw_iter(row.iter().enumerate().map(|(i, &sample)| {
                Pixel(Point::new(x + i as i32, y), Gray8::new(sample))
            }))
            .map_err(|_| SinkError::Other("draw target rejected a pixel row"))?;

        self.y += 1;
        Ok(())
    }

    fn finish(self) -> Result<(), SinkError> {
        Ok(())
    }
}
