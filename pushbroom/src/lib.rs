//! pushbroom - Streaming scanline image rescaling
//!
//! Resizes decoded 8-bit rasters with interleaved bands, consuming the
//! source one scanline at a time. Intended to sit between an image decoder
//! and whatever consumes the decoded bitmap.
//!
//! # Overview
//!
//! - Destination size planning (`compute_dimensions`) and overflow checks
//!   (`validate_max_dimensions`)
//! - Box-filter minification with bounded memory
//! - Nearest-neighbour sampling for magnification
//! - One-call entry points for buffers, rasters and streams
//!
//! # Example
//!
//! ```
//! use pushbroom::{Raster, ScaleOptions, scale_to_fit};
//!
//! let src = Raster::new(640, 480, 3).unwrap();
//! let opts = ScaleOptions::fit(320, 0).preserve_aspect_ratio(true);
//! let fitted = scale_to_fit(&src, &opts).unwrap();
//! assert_eq!((fitted.width(), fitted.height()), (320, 240));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pushbroom_core::*;

// Scaling entry points are re-exported flat; the crate stays reachable as
// a module for the less common items.
pub use pushbroom_scale as scale;
pub use pushbroom_scale::{
    AnyScaler, DimensionOverflow, ScaleError, ScaleOptions, ScaleResult, Scaler, ScalerKind,
    compute_dimensions, scale_image, scale_raster, scale_stream, scale_to_fit, select,
    validate_max_dimensions,
};
