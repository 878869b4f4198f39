//! Scaler selection
//!
//! Picks the scaler variant for a resize. Magnification always uses the
//! sampling scaler: there is no smooth magnifier, so `smooth` is ignored
//! when either destination side is larger than the source. The chosen
//! variant is observable through [`Scaler::kind`].

use crate::error::ScaleResult;
use crate::rough::RoughScaler;
use crate::scaler::{AnyScaler, Scaler, ScalerKind, ScalerParams};
use crate::smooth::SmoothMinifier;
use tracing::debug;

/// Decide which variant handles `params`.
pub fn choose_kind(params: &ScalerParams, smooth: bool) -> ScalerKind {
    if smooth && !params.is_magnifying() {
        ScalerKind::SmoothMinify
    } else {
        ScalerKind::Rough
    }
}

/// Build the scaler for one resize.
///
/// # Arguments
///
/// * `source_w`, `source_h` - Source size
/// * `bands` - Interleaved bands per pixel
/// * `dest_w`, `dest_h` - Destination size
/// * `smooth` - Prefer box filtering when minifying
///
/// # Errors
///
/// Returns [`crate::ScaleError::InvalidGeometry`] if any size or the band
/// count is zero.
pub fn select(
    source_w: u32,
    source_h: u32,
    bands: u32,
    dest_w: u32,
    dest_h: u32,
    smooth: bool,
) -> ScaleResult<AnyScaler> {
    let params = ScalerParams::new(source_w, source_h, bands, dest_w, dest_h)?;
    let scaler: AnyScaler = match choose_kind(&params, smooth) {
        ScalerKind::SmoothMinify => SmoothMinifier::from_params(params)?.into(),
        ScalerKind::Rough => RoughScaler::from_params(params)?.into(),
    };

    debug!(
        source_w,
        source_h,
        bands,
        dest_w,
        dest_h,
        smooth,
        kind = ?scaler.kind(),
        "selected scaler"
    );

    Ok(scaler)
}
