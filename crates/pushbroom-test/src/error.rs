//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic test raster
    #[error("failed to build test raster '{name}': {source}")]
    RasterBuild {
        name: &'static str,
        #[source]
        source: pushbroom_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
