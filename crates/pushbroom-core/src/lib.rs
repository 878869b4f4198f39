//! pushbroom-core - Basic data structures for scanline image rescaling
//!
//! This crate provides the raster container shared by the rest of the
//! workspace:
//!
//! - [`Raster`] - Row-major 8-bit image with interleaved bands
//! - [`Error`] / [`Result`] - Core error type
//!
//! # Sample layout
//!
//! A raster of `width` x `height` pixels with `bands` channels stores
//! `height` scanlines of `width * bands` bytes each, with no row padding.

pub mod error;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{Raster, buffer_len};
