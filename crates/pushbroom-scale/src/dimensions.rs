//! Destination size planning
//!
//! Turns a source size plus optional maximum width/height constraints into
//! the final destination size, and checks that a scaled size can still be
//! addressed before any buffer is allocated for it.
//!
//! A maximum of 0 (or any negative value) means "unconstrained" on that
//! axis. With aspect-ratio preservation, one given side determines the
//! other; when both are given the image is fitted inside the box using a
//! single scale factor.

use crate::error::DimensionOverflow;

/// Largest width, height or pixel count a scaled image may have.
pub const MAX_IMAGE_DIMENSION: i64 = i32::MAX as i64;

/// Compute the final destination size.
///
/// # Arguments
///
/// * `source_w`, `source_h` - Source size in pixels
/// * `max_w`, `max_h` - Requested maxima; `<= 0` means unconstrained
/// * `preserve_aspect` - Keep the source aspect ratio
///
/// # Returns
///
/// `(width, height)`, each at least 1. Calling this twice with the same
/// inputs always yields the same result.
pub fn compute_dimensions(
    source_w: u32,
    source_h: u32,
    max_w: i32,
    max_h: i32,
    preserve_aspect: bool,
) -> (u32, u32) {
    let mut width = max_w.max(0) as u32;
    let mut height = max_h.max(0) as u32;

    if width == 0 && height == 0 {
        return (source_w, source_h);
    }
    if width == source_w && height == source_h {
        return (source_w, source_h);
    }

    let (sw, sh) = (f64::from(source_w), f64::from(source_h));
    if preserve_aspect {
        if width == 0 {
            width = round_dim(sw * f64::from(height) / sh);
        } else if height == 0 {
            height = round_dim(sh * f64::from(width) / sw);
        } else {
            let scale = (f64::from(width) / sw).min(f64::from(height) / sh);
            width = round_dim(sw * scale);
            height = round_dim(sh * scale);
        }
    } else {
        if width == 0 {
            width = source_w;
        }
        if height == 0 {
            height = source_h;
        }
    }

    (width.max(1), height.max(1))
}

// NaN maps to 0 and overflow saturates; both are caught by the floor of 1
// or by `validate_max_dimensions`.
#[inline]
fn round_dim(v: f64) -> u32 {
    v.round() as u32
}

/// Check that `width` x `height` scaled by `scale` stays addressable.
///
/// Each scaled side is rounded up to a whole pixel. The pixel count is
/// computed in `i64` so the product itself cannot overflow.
///
/// # Errors
///
/// Returns [`DimensionOverflow`] when a scaled side or the scaled area
/// exceeds [`MAX_IMAGE_DIMENSION`].
pub fn validate_max_dimensions(
    width: f64,
    height: f64,
    scale: f64,
) -> Result<(), DimensionOverflow> {
    let overflow = DimensionOverflow {
        width,
        height,
        scale,
    };
    let scaled_w = (width * scale).ceil();
    let scaled_h = (height * scale).ceil();
    let max = MAX_IMAGE_DIMENSION as f64;

    if scaled_w.is_nan() || scaled_h.is_nan() || scaled_w > max || scaled_h > max {
        return Err(overflow);
    }
    let area = (scaled_w as i64).saturating_mul(scaled_h as i64);
    if area > MAX_IMAGE_DIMENSION {
        return Err(overflow);
    }
    Ok(())
}
