//! The streaming driver: margins, data rows, margins, in one linear pass.

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::grid::Grid;
use crate::row::build_row;
use crate::sink::{ImageSink, Raster, RasterSink};

/// Renders `grid` into `sink` and returns the sink's finalized output.
///
/// Rows are emitted strictly top to bottom: the top quiet zone, then each
/// grid line repeated to its full visible height, then the bottom quiet
/// zone. The sink is finalized exactly once, after the last row; on any
/// error the sink is dropped unfinalized and the error propagates.
pub fn render<S: ImageSink>(
    grid: Grid<'_>,
    config: &RenderConfig,
    mut sink: S,
) -> Result<S::Output, RenderError> {
    let width = config.image_width(&grid);
    let height = config.image_height(&grid);
    sink.open(width, height)?;

    let margin = vec![config.white(); width as usize];
    for _ in 0..config.quiet_zone() {
        sink.push_row(&margin)?;
    }

    for line in grid.iter() {
        let row = build_row(line, config)?;
        for _ in 0..config.row_repeat() {
            sink.push_row(&row)?;
        }
    }

    for _ in 0..config.quiet_zone() {
        sink.push_row(&margin)?;
    }

    Ok(sink.finish()?)
}

/// Convenience wrapper rendering into an in-memory [`Raster`].
pub fn render_to_raster(grid: Grid<'_>, config: &RenderConfig) -> Result<Raster, RenderError> {
    render(grid, config, RasterSink::new())
}
