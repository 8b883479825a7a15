// error.rs - Construction errors for the Life core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Grid of {rows}x{cols} is invalid; need at least {min_rows}x{min_cols}.")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("Pattern {pattern:?} ({height}x{width}) does not fit a {rows}x{cols} grid.")]
    PatternTooLarge {
        pattern: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Tick interval of {millis} ms is outside {min}..={max} ms.")]
    InvalidInterval { millis: u64, min: u64, max: u64 },
}
