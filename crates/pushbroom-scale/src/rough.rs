//! Nearest-neighbour streaming scaler
//!
//! Each destination pixel copies the source pixel under its center,
//! `floor((i + 0.5) * source / dest)`. Works in both directions: when
//! magnifying, one source scanline fills several destination rows; when
//! minifying, scanlines that no destination row maps to are skipped.

use crate::error::ScaleResult;
use crate::scaler::{Scaler, ScalerKind, ScalerParams};
use pushbroom_core::Raster;

/// Map every destination index to the source index under its center.
fn center_map(source: u32, dest: u32) -> Vec<u32> {
    let (source, dest) = (u64::from(source), u64::from(dest));
    (0..dest)
        .map(|i| (((2 * i + 1) * source) / (2 * dest)).min(source - 1) as u32)
        .collect()
}

/// Sampling scaler for one resize.
#[derive(Debug)]
pub struct RoughScaler {
    params: ScalerParams,
    /// Byte offset of each destination column's source pixel
    col_offsets: Vec<usize>,
    /// Source row of each destination row, non-decreasing
    row_sources: Vec<u32>,
    dest: Raster,
    source_line: u32,
    dest_line: u32,
}

impl RoughScaler {
    /// Create a sampling scaler for `source_w` x `source_h` -> `dest_w` x `dest_h`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScaleError::InvalidGeometry`] if any size or the
    /// band count is zero.
    pub fn new(
        source_w: u32,
        source_h: u32,
        bands: u32,
        dest_w: u32,
        dest_h: u32,
    ) -> ScaleResult<Self> {
        Self::from_params(ScalerParams::new(source_w, source_h, bands, dest_w, dest_h)?)
    }

    /// Create a sampling scaler from validated parameters.
    pub fn from_params(params: ScalerParams) -> ScaleResult<Self> {
        let bands = params.bands as usize;
        let col_offsets = center_map(params.source_width, params.dest_width)
            .into_iter()
            .map(|sx| sx as usize * bands)
            .collect();
        let row_sources = center_map(params.source_height, params.dest_height);
        let dest = Raster::new(params.dest_width, params.dest_height, params.bands)?;

        Ok(Self {
            params,
            col_offsets,
            row_sources,
            dest,
            source_line: 0,
            dest_line: 0,
        })
    }

    fn write_row(&mut self, row: &[u8]) {
        let row_len = self.params.dest_row_len();
        let j = self.dest_line as usize;

        if j > 0 && self.row_sources[j - 1] == self.row_sources[j] {
            let data = self.dest.data_mut();
            data.copy_within((j - 1) * row_len..j * row_len, j * row_len);
            return;
        }

        let bands = self.params.bands as usize;
        let out = &mut self.dest.data_mut()[j * row_len..(j + 1) * row_len];
        if bands == 1 {
            for (o, &off) in out.iter_mut().zip(&self.col_offsets) {
                *o = row[off];
            }
        } else {
            for (pixel, &off) in out.chunks_exact_mut(bands).zip(&self.col_offsets) {
                pixel.copy_from_slice(&row[off..off + bands]);
            }
        }
    }
}

impl Scaler for RoughScaler {
    fn kind(&self) -> ScalerKind {
        ScalerKind::Rough
    }

    fn params(&self) -> &ScalerParams {
        &self.params
    }

    fn push_scanline(&mut self, scanline: &[u8], offset: usize) -> ScaleResult<bool> {
        self.params.check_push(self.source_line, scanline, offset)?;
        let y = self.source_line;
        self.source_line += 1;

        let row = &scanline[offset..offset + self.params.source_row_len()];
        while self.dest_line < self.params.dest_height
            && self.row_sources[self.dest_line as usize] <= y
        {
            self.write_row(row);
            self.dest_line += 1;
        }

        Ok(self.is_complete())
    }

    fn source_rows_pushed(&self) -> u32 {
        self.source_line
    }

    fn is_complete(&self) -> bool {
        self.dest_line == self.params.dest_height
    }

    fn take_destination(self) -> Raster {
        self.dest
    }
}
