//! Failure modes of a render call. Every error aborts the whole encode;
//! there is no partial image output.

use thiserror::Error;

/// Top-level error returned by [`render`](crate::render).
#[derive(Debug, Error)]
pub enum RenderError {
    /// A codeword's natural binary representation is wider than the bar
    /// pattern slot it must occupy (17 bits, or 18 for a stop pattern).
    /// Truncating would shift every following bar, so the encode aborts.
    #[error("codeword {value} does not fit in {width} bits")]
    CodewordOverflow { value: u32, width: u8 },

    /// The grid failed shape validation before any pixel was emitted.
    #[error("irregular grid: {0}")]
    IrregularGrid(#[from] IrregularGrid),

    /// The image sink rejected a row or failed to finalize. Propagated
    /// unchanged, never retried.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Grid shape violations, detected eagerly by [`Grid::new`](crate::Grid::new).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IrregularGrid {
    #[error("grid has no lines")]
    Empty,

    #[error("grid lines must hold at least 2 codewords, got {0}")]
    TooNarrow(usize),

    #[error("line {line} holds {got} codewords, expected {expected}")]
    UnevenLine {
        line: usize,
        got: usize,
        expected: usize,
    },

    /// An absent codeword in the stop-pattern column would contribute 17
    /// bits where the width formula counts 18, leaving the line one module
    /// short. See [`Bitfield::absent`](crate::Bitfield::absent).
    #[error("line {0} has an absent stop pattern")]
    AbsentStopPattern(usize),
}

/// Failure reported by an [`ImageSink`](crate::ImageSink) implementation.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Stream-backed sinks surface the underlying I/O failure unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Sink-specific failure with no richer representation.
    #[error("{0}")]
    Other(&'static str),
}
