//! Image scaling entry points
//!
//! Provides:
//! - `scale_image`: rescale a bare sample buffer
//! - `scale_raster`: rescale a [`Raster`]
//! - `scale_stream`: rescale rows read from a [`Read`] source
//! - `scale_to_fit`: plan the destination size from [`ScaleOptions`],
//!   validate it, then rescale
//!
//! Every entry point selects a scaler with [`select`] and feeds it with
//! [`drive`]; any error aborts the whole resize.

use crate::dimensions::{compute_dimensions, validate_max_dimensions};
use crate::driver::{BufferSource, StreamSource, drive};
use crate::error::ScaleResult;
use crate::options::ScaleOptions;
use crate::select::select;
use pushbroom_core::Raster;
use std::io::Read;

/// Rescale a row-major sample buffer.
///
/// # Arguments
///
/// * `src` - `source_w * source_h * bands` samples, row-major
/// * `source_w`, `source_h` - Source size
/// * `bands` - Interleaved bands per pixel
/// * `dest_w`, `dest_h` - Destination size
/// * `smooth` - Box-filter when minifying
///
/// # Returns
///
/// Exactly `dest_w * dest_h * bands` samples.
///
/// # Errors
///
/// [`crate::ScaleError::InvalidGeometry`] for zero sizes,
/// [`crate::ScaleError::ScanlineProtocolViolation`] if `src` is too short.
pub fn scale_image(
    src: &[u8],
    source_w: u32,
    source_h: u32,
    bands: u32,
    dest_w: u32,
    dest_h: u32,
    smooth: bool,
) -> ScaleResult<Vec<u8>> {
    let scaler = select(source_w, source_h, bands, dest_w, dest_h, smooth)?;
    let dest = drive(&mut BufferSource::new(src), scaler)?;
    Ok(dest.into_data())
}

/// Rescale a raster to `dest_w` x `dest_h`.
pub fn scale_raster(src: &Raster, dest_w: u32, dest_h: u32, smooth: bool) -> ScaleResult<Raster> {
    let scaler = select(
        src.width(),
        src.height(),
        src.bands(),
        dest_w,
        dest_h,
        smooth,
    )?;
    drive(&mut BufferSource::new(src.data()), scaler)
}

/// Rescale an image whose rows are read sequentially from `reader`.
///
/// Reads exactly `source_w * source_h * bands` bytes.
///
/// # Errors
///
/// A failed or short read is returned as
/// [`crate::ScaleError::SourceReadError`].
pub fn scale_stream<R: Read>(
    reader: R,
    source_w: u32,
    source_h: u32,
    bands: u32,
    dest_w: u32,
    dest_h: u32,
    smooth: bool,
) -> ScaleResult<Raster> {
    let scaler = select(source_w, source_h, bands, dest_w, dest_h, smooth)?;
    drive(&mut StreamSource::new(reader), scaler)
}

/// Fit a decoded raster to the bounds in `options`.
///
/// The destination size comes from [`compute_dimensions`] and is checked
/// with [`validate_max_dimensions`] at `options.pixel_scale` before any
/// buffer is allocated. A raster that already has the planned size is
/// returned as a copy.
pub fn scale_to_fit(src: &Raster, options: &ScaleOptions) -> ScaleResult<Raster> {
    let (dest_w, dest_h) = compute_dimensions(
        src.width(),
        src.height(),
        options.max_width,
        options.max_height,
        options.preserve_aspect_ratio,
    );
    validate_max_dimensions(f64::from(dest_w), f64::from(dest_h), options.pixel_scale)?;

    if dest_w == src.width() && dest_h == src.height() {
        return Ok(src.clone());
    }
    scale_raster(src, dest_w, dest_h, options.smooth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaleError;
    use std::io::Cursor;

    #[test]
    fn test_scale_image_length() {
        let src = vec![0u8; 10 * 8 * 4];
        for (dw, dh, smooth) in [(5, 4, true), (5, 4, false), (20, 3, true), (1, 1, true)] {
            let out = scale_image(&src, 10, 8, 4, dw, dh, smooth).unwrap();
            assert_eq!(out.len(), (dw * dh * 4) as usize);
        }
    }

    #[test]
    fn test_scale_image_ramp() {
        let src: Vec<u8> = (0..16).collect();
        assert_eq!(
            scale_image(&src, 4, 4, 1, 2, 2, true).unwrap(),
            vec![0, 1, 6, 7]
        );
        assert_eq!(
            scale_image(&src, 4, 4, 1, 2, 2, false).unwrap(),
            vec![5, 7, 13, 15]
        );
    }

    #[test]
    fn test_scale_image_zero_band() {
        assert!(matches!(
            scale_image(&[], 4, 4, 0, 2, 2, true),
            Err(ScaleError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_scale_raster_matches_scale_image() {
        let data: Vec<u8> = (0..60u32).map(|v| (v * 7 % 256) as u8).collect();
        let src = Raster::from_vec(5, 4, 3, data.clone()).unwrap();
        let r = scale_raster(&src, 3, 2, true).unwrap();
        assert_eq!((r.width(), r.height(), r.bands()), (3, 2, 3));
        assert_eq!(r.data(), scale_image(&data, 5, 4, 3, 3, 2, true).unwrap());
    }

    #[test]
    fn test_scale_stream() {
        let data = vec![200u8; 9 * 9];
        let r = scale_stream(Cursor::new(data), 9, 9, 1, 3, 3, true).unwrap();
        assert!(r.data().iter().all(|&v| v == 200));
    }

    #[test]
    fn test_scale_to_fit_preserve() {
        let src = Raster::new(640, 480, 1).unwrap();
        let opts = ScaleOptions::fit(320, 0).preserve_aspect_ratio(true);
        let r = scale_to_fit(&src, &opts).unwrap();
        assert_eq!((r.width(), r.height()), (320, 240));
    }

    #[test]
    fn test_scale_to_fit_unconstrained_is_copy() {
        let src = Raster::from_vec(2, 1, 1, vec![3, 4]).unwrap();
        let r = scale_to_fit(&src, &ScaleOptions::default()).unwrap();
        assert_eq!(r, src);
    }

    #[test]
    fn test_scale_to_fit_overflow() {
        let src = Raster::new(4, 4, 1).unwrap();
        let opts = ScaleOptions::fit(2, 2).pixel_scale(1e10);
        assert!(matches!(
            scale_to_fit(&src, &opts),
            Err(ScaleError::DimensionOverflow(_))
        ));
    }
}
