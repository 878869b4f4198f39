//! pushbroom-test - Regression test framework for pushbroom
//!
//! `RegParams` numbers every comparison in a regression test, records
//! each failure with its index, and reports the outcome in `cleanup`.
//!
//! Test inputs are synthetic rasters built by the functions in this crate,
//! so no image files need to be checked in.
//!
//! # Usage
//!
//! ```ignore
//! use pushbroom_test::{RegParams, ramp_raster};
//!
//! let mut rp = RegParams::new("smooth_minify");
//! let src = ramp_raster(4, 4, 1).unwrap();
//! rp.compare_values(16.0, src.data().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod images;
mod params;

pub use error::{TestError, TestResult};
pub use images::{checker_raster, constant_raster, gradient_raster, ramp_raster};
pub use params::RegParams;
