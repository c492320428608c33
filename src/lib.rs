//! Grayscale rasterizer for PDF417 codeword grids.
//!
//! Takes an already-computed grid of bar-pattern codewords (17 bits each,
//! 18 for the stop pattern closing every line) and streams a single-channel
//! 8-bit raster image, row by row, into an [`ImageSink`]: quiet-zone
//! margins, then each line stretched to its visible height, then margins
//! again. Deciding *what* to encode is out of scope; only the geometry
//! lives here.
//!
//! ```
//! use pdf417_raster::{render_to_raster, Grid, RenderConfig};
//!
//! let lines = vec![vec![Some(3), Some(5)]];
//! let grid = Grid::new(&lines)?;
//! let raster = render_to_raster(grid, &RenderConfig::new())?;
//! assert_eq!((raster.width(), raster.height()), (195, 40));
//! # Ok::<(), pdf417_raster::RenderError>(())
//! ```

mod bits;
mod config;
mod error;
mod grid;
mod render;
mod row;
mod sink;

#[cfg(feature = "embedded-graphics")]
mod eg;
#[cfg(feature = "image")]
mod img;

pub use bits::{Bitfield, Bits, CODEWORD_BITS, STOP_BITS};
pub use config::RenderConfig;
pub use error::{IrregularGrid, RenderError, SinkError};
pub use grid::{Codeword, Grid};
pub use render::{render, render_to_raster};
pub use sink::{ImageSink, PgmSink, Raster, RasterSink};

#[cfg(feature = "embedded-graphics")]
pub use eg::EgSink;
#[cfg(feature = "image")]
pub use img::GrayImageSink;
