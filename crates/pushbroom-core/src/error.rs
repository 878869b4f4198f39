//! Error types for pushbroom-core
//!
//! Provides a unified error type for raster construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pushbroom-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid number of interleaved bands
    #[error("invalid band count: {0}")]
    InvalidBands(u32),

    /// Sample buffer does not match the raster geometry
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Raster size cannot be addressed on this platform
    #[error("raster too large: {width}x{height}x{bands}")]
    TooLarge { width: u32, height: u32, bands: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
