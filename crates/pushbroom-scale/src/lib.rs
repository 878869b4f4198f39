//! pushbroom-scale - Streaming image rescaling
//!
//! This crate resizes 8-bit rasters with interleaved bands one scanline at
//! a time:
//!
//! - Destination size planning with optional aspect-ratio preservation
//! - Overflow checks on scaled sizes before allocation
//! - Box-filter minification over a bounded ring of intermediate rows
//! - Nearest-neighbour sampling for magnification and fast minification
//! - Drivers for in-memory and sequentially read sources
//!
//! # Example
//!
//! ```
//! use pushbroom_scale::{ScalerKind, scale_image, select, Scaler};
//!
//! let src: Vec<u8> = (0..16).collect();
//! let out = scale_image(&src, 4, 4, 1, 2, 2, true).unwrap();
//! assert_eq!(out, vec![0, 1, 6, 7]);
//!
//! // There is no smooth magnifier; magnification is always sampled.
//! let scaler = select(4, 4, 1, 8, 8, true).unwrap();
//! assert_eq!(scaler.kind(), ScalerKind::Rough);
//! ```

pub mod dimensions;
pub mod driver;
mod error;
pub mod geometry;
pub mod options;
pub mod rough;
pub mod scale;
pub mod scaler;
pub mod select;
pub mod smooth;

pub use dimensions::{MAX_IMAGE_DIMENSION, compute_dimensions, validate_max_dimensions};
pub use driver::{BufferSource, ScanlineSource, StreamSource, drive};
pub use error::{DimensionOverflow, ScaleError, ScaleResult};
pub use geometry::{AxisIntervals, BoxGeometry};
pub use options::ScaleOptions;
pub use rough::RoughScaler;
pub use scale::{scale_image, scale_raster, scale_stream, scale_to_fit};
pub use scaler::{AnyScaler, Scaler, ScalerKind, ScalerParams};
pub use select::{choose_kind, select};
pub use smooth::SmoothMinifier;
