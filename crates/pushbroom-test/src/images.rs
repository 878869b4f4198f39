//! Synthetic test rasters
//!
//! Deterministic patterns used in place of decoded image files.

use crate::error::{TestError, TestResult};
use pushbroom_core::Raster;

fn build(
    name: &'static str,
    width: u32,
    height: u32,
    bands: u32,
    f: impl Fn(u32, u32, u32) -> u8,
) -> TestResult<Raster> {
    let mut raster =
        Raster::new(width, height, bands).map_err(|source| TestError::RasterBuild { name, source })?;
    let data = raster.data_mut();
    let mut i = 0;
    for y in 0..height {
        for x in 0..width {
            for b in 0..bands {
                data[i] = f(x, y, b);
                i += 1;
            }
        }
    }
    Ok(raster)
}

/// Samples count up from 0 in storage order, wrapping at 256.
///
/// A 4x4 single-band ramp holds `0, 1, ..., 15` row-major.
pub fn ramp_raster(width: u32, height: u32, bands: u32) -> TestResult<Raster> {
    build("ramp", width, height, bands, |x, y, b| {
        (((y as u64 * width as u64 + x as u64) * bands as u64 + b as u64) % 256) as u8
    })
}

/// Every sample equals `value`.
pub fn constant_raster(width: u32, height: u32, bands: u32, value: u8) -> TestResult<Raster> {
    build("constant", width, height, bands, |_, _, _| value)
}

/// Smooth diagonal gradient with a per-band offset.
pub fn gradient_raster(width: u32, height: u32, bands: u32) -> TestResult<Raster> {
    let span = (width + height).saturating_sub(2).max(1) as u64;
    build("gradient", width, height, bands, |x, y, b| {
        let base = (x as u64 + y as u64) * 255 / span;
        ((base + b as u64 * 64) % 256) as u8
    })
}

/// Black/white checkerboard with square cells of `cell` pixels.
pub fn checker_raster(width: u32, height: u32, bands: u32, cell: u32) -> TestResult<Raster> {
    let cell = cell.max(1);
    build("checker", width, height, bands, |x, y, _| {
        if ((x / cell) + (y / cell)) % 2 == 0 { 0 } else { 255 }
    })
}
