//! Scanline driver
//!
//! Feeds a complete source image into a [`Scaler`], one scanline at a time
//! from top to bottom, and returns the finished destination.
//!
//! Two source kinds are supported:
//!
//! - [`BufferSource`]: the whole image is in memory; each push hands the
//!   scaler the full buffer plus the row offset, so nothing is copied.
//! - [`StreamSource`]: rows are read sequentially from any [`Read`]
//!   implementation into one reusable row buffer.

use crate::error::{ScaleError, ScaleResult};
use crate::scaler::Scaler;
use pushbroom_core::Raster;
use std::io::Read;
use tracing::debug;

/// Something that can yield source scanlines in order.
pub trait ScanlineSource {
    /// Get scanline `y` of `row_len` bytes.
    ///
    /// Returns a buffer and the offset in it where the scanline starts.
    /// Rows are requested strictly in increasing order.
    fn scanline(&mut self, y: u32, row_len: usize) -> ScaleResult<(&[u8], usize)>;
}

/// In-memory source image.
#[derive(Debug, Clone, Copy)]
pub struct BufferSource<'a> {
    data: &'a [u8],
}

impl<'a> BufferSource<'a> {
    /// Wrap a row-major sample buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl ScanlineSource for BufferSource<'_> {
    fn scanline(&mut self, y: u32, row_len: usize) -> ScaleResult<(&[u8], usize)> {
        let offset = (y as usize).checked_mul(row_len).ok_or_else(|| {
            ScaleError::ScanlineProtocolViolation(format!("row {} offset overflows", y))
        })?;
        Ok((self.data, offset))
    }
}

/// Sequentially read source image.
#[derive(Debug)]
pub struct StreamSource<R> {
    reader: R,
    row: Vec<u8>,
}

impl<R: Read> StreamSource<R> {
    /// Wrap a reader positioned at the first sample of the first row.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            row: Vec::new(),
        }
    }

    /// Recover the reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ScanlineSource for StreamSource<R> {
    fn scanline(&mut self, _y: u32, row_len: usize) -> ScaleResult<(&[u8], usize)> {
        self.row.resize(row_len, 0);
        self.reader.read_exact(&mut self.row)?;
        Ok((&self.row, 0))
    }
}

/// Push every source scanline into `scaler` and return the destination.
///
/// Calls [`Scaler::push_scanline`] exactly `source_height` times. Any
/// error, including a failed read, aborts the resize; no partial
/// destination is returned.
pub fn drive<S, T>(source: &mut S, mut scaler: T) -> ScaleResult<Raster>
where
    S: ScanlineSource + ?Sized,
    T: Scaler,
{
    let params = *scaler.params();
    let row_len = params.source_row_len();
    debug!(
        kind = ?scaler.kind(),
        source_w = params.source_width,
        source_h = params.source_height,
        dest_w = params.dest_width,
        dest_h = params.dest_height,
        "resize started"
    );

    for y in 0..params.source_height {
        let (buf, offset) = source.scanline(y, row_len)?;
        scaler.push_scanline(buf, offset)?;
    }

    if !scaler.is_complete() {
        return Err(ScaleError::ScanlineProtocolViolation(format!(
            "destination incomplete after {} scanlines",
            scaler.source_rows_pushed()
        )));
    }

    debug!(rows = params.source_height, "resize finished");
    Ok(scaler.take_destination())
}
