use std::num::ParseFloatError;

use thiserror::Error;

/// Errors raised while measuring sections or building Bonjean curves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BonjeanError {
    /// A shape measured from two boundary points spans no area,
    /// e.g. a rectangle whose points share a horizontal coordinate.
    #[error("degenerate shape: the boundary points span no area")]
    DegenerateShape,

    /// The segment between points `index` and `index + 1` spans no area.
    #[error("degenerate segment at index {index}: no area is spanned")]
    DegenerateSegment { index: usize },

    /// Values and ordinates were not paired one to one.
    #[error("length mismatch: {values} values against {ordinates} ordinates")]
    LengthMismatch { values: usize, ordinates: usize },

    /// A section needs at least two offset points.
    #[error("at least 2 offset points are required, got {count}")]
    InsufficientPoints { count: usize },
}

/// Errors raised while reading an offset table.
#[derive(Debug, Error)]
pub enum OffsetTableError {
    #[error("line {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("line {line}, column {column}: {source}")]
    InvalidNumber {
        line: usize,
        column: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("offset table contains no rows")]
    Empty,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
