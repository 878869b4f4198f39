//! Box-filter sampling geometry
//!
//! For every destination column `i` the smooth minifier averages source
//! columns `left[i]..=right[i]`, and for every destination row `j` source
//! rows `top[j]..=bottom[j]`. The intervals are centered on the
//! backward-mapped coordinate `floor(i * scale)` and are exactly
//! `ceil(source / dest)` samples wide, so no source sample is skipped.
//!
//! Interval ends may fall outside the source image. Callers clamp them to
//! the nearest edge (edge replication) instead of padding with zeros.

use crate::error::{ScaleError, ScaleResult};

/// Sampling intervals along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisIntervals {
    /// Source samples per destination sample (`source / dest`)
    pub scale: f64,
    /// Interval width, `ceil(source / dest)`
    pub box_size: u32,
    /// First source coordinate of each interval (may be negative)
    pub start: Vec<i64>,
    /// Last source coordinate of each interval (may be `>= source`)
    pub end: Vec<i64>,
}

impl AxisIntervals {
    fn new(source: u32, dest: u32) -> Self {
        let scale = f64::from(source) / f64::from(dest);
        let box_size = source.div_ceil(dest);
        let before = i64::from(box_size / 2);
        let after = i64::from(box_size) - before - 1;

        let (start, end) = (0..dest)
            .map(|i| {
                let center = (f64::from(i) * scale).floor() as i64;
                (center - before, center + after)
            })
            .unzip();

        Self {
            scale,
            box_size,
            start,
            end,
        }
    }
}

/// Immutable box-filter geometry for one minification.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGeometry {
    /// Column intervals (`left` / `right`)
    pub columns: AxisIntervals,
    /// Row intervals (`top` / `bottom`)
    pub rows: AxisIntervals,
}

impl BoxGeometry {
    /// Derive the geometry for `source_w` x `source_h` -> `dest_w` x `dest_h`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidGeometry`] if any size is zero or the
    /// destination is larger than the source on either axis.
    pub fn new(source_w: u32, source_h: u32, dest_w: u32, dest_h: u32) -> ScaleResult<Self> {
        if source_w == 0 || source_h == 0 || dest_w == 0 || dest_h == 0 {
            return Err(ScaleError::InvalidGeometry(format!(
                "all sizes must be positive: {}x{} -> {}x{}",
                source_w, source_h, dest_w, dest_h
            )));
        }
        if dest_w > source_w || dest_h > source_h {
            return Err(ScaleError::InvalidGeometry(format!(
                "box filter cannot magnify: {}x{} -> {}x{}",
                source_w, source_h, dest_w, dest_h
            )));
        }
        Ok(Self {
            columns: AxisIntervals::new(source_w, dest_w),
            rows: AxisIntervals::new(source_h, dest_h),
        })
    }

    /// Box width in source columns.
    pub fn box_width(&self) -> u32 {
        self.columns.box_size
    }

    /// Box height in source rows; also the ring buffer depth.
    pub fn box_height(&self) -> u32 {
        self.rows.box_size
    }

    /// Column interval `(left, right)` of destination column `i`.
    pub fn column(&self, i: usize) -> (i64, i64) {
        (self.columns.start[i], self.columns.end[i])
    }

    /// Row interval `(top, bottom)` of destination row `j`.
    pub fn row(&self, j: usize) -> (i64, i64) {
        (self.rows.start[j], self.rows.end[j])
    }
}
