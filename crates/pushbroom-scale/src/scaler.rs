//! Streaming scaler contract
//!
//! A scaler is built for one resize, fed every source scanline exactly
//! once from top to bottom, and then consumed to obtain the destination.
//!
//! # Incomplete destinations
//!
//! The destination buffer is zero-initialised and rows are written in
//! order. If fewer than `source_height` scanlines were pushed before
//! [`Scaler::take_destination`], every row that was not yet produced is
//! all zeros. [`Scaler::is_complete`] reports whether that happened.

use crate::error::{ScaleError, ScaleResult};
use crate::rough::RoughScaler;
use crate::smooth::SmoothMinifier;
use pushbroom_core::Raster;

/// Which scaler variant is doing the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalerKind {
    /// Box-filter minification
    SmoothMinify,
    /// Nearest-neighbour sampling, any direction
    Rough,
}

/// Source/destination sizes shared by every scaler variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalerParams {
    /// Source width in pixels
    pub source_width: u32,
    /// Source height, also the number of scanlines to push
    pub source_height: u32,
    /// Interleaved samples per pixel
    pub bands: u32,
    /// Destination width in pixels
    pub dest_width: u32,
    /// Destination height in pixels
    pub dest_height: u32,
}

impl ScalerParams {
    /// Validate and bundle the construction parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidGeometry`] if any value is zero.
    pub fn new(
        source_width: u32,
        source_height: u32,
        bands: u32,
        dest_width: u32,
        dest_height: u32,
    ) -> ScaleResult<Self> {
        if source_width == 0
            || source_height == 0
            || bands == 0
            || dest_width == 0
            || dest_height == 0
        {
            return Err(ScaleError::InvalidGeometry(format!(
                "dimensions and bands must be positive: {}x{}x{} -> {}x{}",
                source_width, source_height, bands, dest_width, dest_height
            )));
        }
        Ok(Self {
            source_width,
            source_height,
            bands,
            dest_width,
            dest_height,
        })
    }

    /// Bytes in one source scanline.
    pub fn source_row_len(&self) -> usize {
        self.source_width as usize * self.bands as usize
    }

    /// Bytes in one destination scanline.
    pub fn dest_row_len(&self) -> usize {
        self.dest_width as usize * self.bands as usize
    }

    /// True if either destination side is larger than the source side.
    pub fn is_magnifying(&self) -> bool {
        self.dest_width > self.source_width || self.dest_height > self.source_height
    }

    /// Check one push against the scanline protocol.
    ///
    /// `pushed` is the number of scanlines already accepted.
    pub(crate) fn check_push(&self, pushed: u32, scanline: &[u8], offset: usize) -> ScaleResult<()> {
        if pushed >= self.source_height {
            return Err(ScaleError::ScanlineProtocolViolation(format!(
                "all {} source scanlines have already been pushed",
                self.source_height
            )));
        }
        let needed = offset.checked_add(self.source_row_len());
        if needed.is_none_or(|n| n > scanline.len()) {
            return Err(ScaleError::ScanlineProtocolViolation(format!(
                "scanline {} needs {} bytes at offset {}, buffer has {}",
                pushed,
                self.source_row_len(),
                offset,
                scanline.len()
            )));
        }
        Ok(())
    }
}

/// Streaming scaler capability.
pub trait Scaler {
    /// The variant doing the work.
    fn kind(&self) -> ScalerKind;

    /// Sizes this scaler was built for.
    fn params(&self) -> &ScalerParams;

    /// Consume the next source scanline.
    ///
    /// `scanline[offset..offset + source_width * bands]` holds the row.
    /// Returns `true` once the destination is fully written; this happens
    /// on or before the push of the last source row.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::ScanlineProtocolViolation`] if the slice is
    /// too short or more than `source_height` rows are pushed.
    fn push_scanline(&mut self, scanline: &[u8], offset: usize) -> ScaleResult<bool>;

    /// Number of source scanlines accepted so far.
    fn source_rows_pushed(&self) -> u32;

    /// True once every destination row has been written.
    fn is_complete(&self) -> bool;

    /// Hand out the destination raster.
    ///
    /// Rows not yet produced are zero; see the module documentation.
    fn take_destination(self) -> Raster
    where
        Self: Sized;
}

/// A scaler chosen at run time by [`crate::select`].
#[derive(Debug)]
pub enum AnyScaler {
    /// Box-filter minification
    Smooth(SmoothMinifier),
    /// Nearest-neighbour sampling
    Rough(RoughScaler),
}

impl Scaler for AnyScaler {
    fn kind(&self) -> ScalerKind {
        match self {
            AnyScaler::Smooth(s) => s.kind(),
            AnyScaler::Rough(s) => s.kind(),
        }
    }

    fn params(&self) -> &ScalerParams {
        match self {
            AnyScaler::Smooth(s) => s.params(),
            AnyScaler::Rough(s) => s.params(),
        }
    }

    fn push_scanline(&mut self, scanline: &[u8], offset: usize) -> ScaleResult<bool> {
        match self {
            AnyScaler::Smooth(s) => s.push_scanline(scanline, offset),
            AnyScaler::Rough(s) => s.push_scanline(scanline, offset),
        }
    }

    fn source_rows_pushed(&self) -> u32 {
        match self {
            AnyScaler::Smooth(s) => s.source_rows_pushed(),
            AnyScaler::Rough(s) => s.source_rows_pushed(),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            AnyScaler::Smooth(s) => s.is_complete(),
            AnyScaler::Rough(s) => s.is_complete(),
        }
    }

    fn take_destination(self) -> Raster {
        match self {
            AnyScaler::Smooth(s) => s.take_destination(),
            AnyScaler::Rough(s) => s.take_destination(),
        }
    }
}

impl From<SmoothMinifier> for AnyScaler {
    fn from(s: SmoothMinifier) -> Self {
        AnyScaler::Smooth(s)
    }
}

impl From<RoughScaler> for AnyScaler {
    fn from(s: RoughScaler) -> Self {
        AnyScaler::Rough(s)
    }
}
