//! Streaming box-filter minification
//!
//! `SmoothMinifier` consumes source scanlines top to bottom and produces
//! destination rows as soon as their source box is complete. Memory use is
//! bounded by one destination raster plus `box_height` intermediate rows.
//!
//! # Algorithm
//!
//! 1. **Horizontal pass**: each incoming scanline is averaged down to
//!    `dest_width` pixels using the column intervals of [`BoxGeometry`]
//!    and stored in ring slot `source_row % box_height`.
//! 2. **Readiness**: destination row `j` is computed when the current
//!    source row reaches `bottom[j]`, or when the last source row arrives
//!    while `j` is the last destination row.
//! 3. **Vertical pass**: the ring rows for source rows `top[j]..=bottom[j]`
//!    are summed and divided by `box_height`.
//!
//! Out-of-range columns and rows replicate the nearest edge. Both passes
//! divide with truncation, so output is bit-reproducible.

use crate::error::ScaleResult;
use crate::geometry::{AxisIntervals, BoxGeometry};
use crate::scaler::{Scaler, ScalerKind, ScalerParams};
use pushbroom_core::Raster;
use tracing::trace;

/// Box-filter minifier for one resize.
#[derive(Debug)]
pub struct SmoothMinifier {
    params: ScalerParams,
    geometry: BoxGeometry,
    /// `box_height` intermediate rows of `dest_row_len` bytes
    ring: Vec<u8>,
    /// Vertical accumulators, one per destination sample
    sums: Vec<u64>,
    dest: Raster,
    source_line: u32,
    dest_line: u32,
    complete: bool,
}

impl SmoothMinifier {
    /// Create a minifier for `source_w` x `source_h` -> `dest_w` x `dest_h`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ScaleError::InvalidGeometry`] if any size or the
    /// band count is zero, or if the destination is larger than the
    /// source on either axis.
    pub fn new(
        source_w: u32,
        source_h: u32,
        bands: u32,
        dest_w: u32,
        dest_h: u32,
    ) -> ScaleResult<Self> {
        Self::from_params(ScalerParams::new(source_w, source_h, bands, dest_w, dest_h)?)
    }

    /// Create a minifier from validated parameters.
    pub fn from_params(params: ScalerParams) -> ScaleResult<Self> {
        let geometry = BoxGeometry::new(
            params.source_width,
            params.source_height,
            params.dest_width,
            params.dest_height,
        )?;
        let dest = Raster::new(params.dest_width, params.dest_height, params.bands)?;
        let row_len = params.dest_row_len();

        trace!(
            box_width = geometry.box_width(),
            box_height = geometry.box_height(),
            scale_x = geometry.columns.scale,
            scale_y = geometry.rows.scale,
            "box filter geometry"
        );

        Ok(Self {
            ring: vec![0; geometry.box_height() as usize * row_len],
            sums: vec![0; row_len],
            params,
            geometry,
            dest,
            source_line: 0,
            dest_line: 0,
            complete: false,
        })
    }

    /// Sampling geometry in use.
    pub fn geometry(&self) -> &BoxGeometry {
        &self.geometry
    }

    fn ring_slot(&self, source_row: u32) -> usize {
        (source_row % self.geometry.box_height()) as usize
    }

    /// Vertical pass for the current destination row, `y` being the newest
    /// source row held in the ring.
    fn emit_row(&mut self, y: u32) {
        let row_len = self.params.dest_row_len();
        let (top, bottom) = self.geometry.row(self.dest_line as usize);

        self.sums.fill(0);
        for r in top..=bottom {
            let source_row = r.clamp(0, i64::from(y)) as u32;
            let start = self.ring_slot(source_row) * row_len;
            let ring_row = &self.ring[start..start + row_len];
            for (sum, &s) in self.sums.iter_mut().zip(ring_row) {
                *sum += u64::from(s);
            }
        }

        let div = u64::from(self.geometry.box_height());
        let start = self.dest_line as usize * row_len;
        let out = &mut self.dest.data_mut()[start..start + row_len];
        for (o, &sum) in out.iter_mut().zip(&self.sums) {
            *o = (sum / div) as u8;
        }
    }
}

/// Horizontal pass, single band.
fn average_columns_gray(row: &[u8], cols: &AxisIntervals, out: &mut [u8]) {
    let last = row.len() as i64 - 1;
    let div = u64::from(cols.box_size);
    for (dx, o) in out.iter_mut().enumerate() {
        let mut sum = 0u64;
        for sx in cols.start[dx]..=cols.end[dx] {
            sum += u64::from(row[sx.clamp(0, last) as usize]);
        }
        *o = (sum / div) as u8;
    }
}

/// Horizontal pass, interleaved bands.
fn average_columns(row: &[u8], cols: &AxisIntervals, bands: usize, out: &mut [u8]) {
    let last = (row.len() / bands) as i64 - 1;
    let div = u64::from(cols.box_size);
    for (dx, pixel) in out.chunks_exact_mut(bands).enumerate() {
        for (b, o) in pixel.iter_mut().enumerate() {
            let mut sum = 0u64;
            for sx in cols.start[dx]..=cols.end[dx] {
                sum += u64::from(row[sx.clamp(0, last) as usize * bands + b]);
            }
            *o = (sum / div) as u8;
        }
    }
}

impl Scaler for SmoothMinifier {
    fn kind(&self) -> ScalerKind {
        ScalerKind::SmoothMinify
    }

    fn params(&self) -> &ScalerParams {
        &self.params
    }

    fn push_scanline(&mut self, scanline: &[u8], offset: usize) -> ScaleResult<bool> {
        self.params.check_push(self.source_line, scanline, offset)?;
        let y = self.source_line;
        self.source_line += 1;

        if self.complete {
            return Ok(true);
        }

        let row = &scanline[offset..offset + self.params.source_row_len()];
        let row_len = self.params.dest_row_len();
        let start = self.ring_slot(y) * row_len;
        let slot = &mut self.ring[start..start + row_len];
        match self.params.bands {
            1 => average_columns_gray(row, &self.geometry.columns, slot),
            bands => average_columns(row, &self.geometry.columns, bands as usize, slot),
        }

        let (_, bottom) = self.geometry.row(self.dest_line as usize);
        let last_dest = self.dest_line + 1 == self.params.dest_height;
        let last_source = y + 1 == self.params.source_height;
        if i64::from(y) >= bottom || (last_source && last_dest) {
            self.emit_row(y);
            if last_dest {
                self.complete = true;
            } else {
                self.dest_line += 1;
            }
        }

        Ok(self.complete)
    }

    fn source_rows_pushed(&self) -> u32 {
        self.source_line
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn take_destination(self) -> Raster {
        self.dest
    }
}
