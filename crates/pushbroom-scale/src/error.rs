//! Error types for pushbroom-scale

use thiserror::Error;

/// Scaled dimensions cannot be addressed with a 32-bit signed pixel count
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("scaled image {width}x{height} at scale {scale} exceeds the maximum image size")]
pub struct DimensionOverflow {
    /// Unscaled width
    pub width: f64,
    /// Unscaled height
    pub height: f64,
    /// Scale factor applied to both sides
    pub scale: f64,
}

/// Errors that can occur while rescaling
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pushbroom_core::Error),

    /// Zero dimension or band count, or a minifier asked to magnify
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Scaled area exceeds the addressable range
    #[error(transparent)]
    DimensionOverflow(#[from] DimensionOverflow),

    /// Scanlines pushed in the wrong number or with a short buffer
    #[error("scanline protocol violation: {0}")]
    ScanlineProtocolViolation(String),

    /// Reading a scanline from a stream source failed
    #[error("source read error: {0}")]
    SourceReadError(#[from] std::io::Error),
}

/// Result type for scale operations
pub type ScaleResult<T> = Result<T, ScaleError>;
