//! Raster - The image container
//!
//! A `Raster` holds `height` scanlines of `width * bands` unsigned 8-bit
//! samples. Bands are interleaved within a pixel and rows are stored
//! top to bottom with no padding, so scanline `y` occupies bytes
//! `y * row_len .. (y + 1) * row_len`.
//!
//! # Ownership model
//!
//! Unlike a shared image handle, a `Raster` owns its sample vector
//! outright. Scalers hand their destination out by value once it is
//! complete, and `into_data` gives the bare buffer back to the caller.

use crate::error::{Error, Result};

/// Row-major 8-bit raster with interleaved bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    bands: u32,
    data: Vec<u8>,
}

/// Compute `width * height * bands` as a byte count.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] for a zero width or height,
/// [`Error::InvalidBands`] for zero bands and [`Error::TooLarge`] when the
/// product does not fit in `usize`.
pub fn buffer_len(width: u32, height: u32, bands: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    if bands == 0 {
        return Err(Error::InvalidBands(bands));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(bands as usize))
        .ok_or(Error::TooLarge {
            width,
            height,
            bands,
        })
}

impl Raster {
    /// Create a zero-filled raster.
    ///
    /// # Errors
    ///
    /// See [`buffer_len`].
    pub fn new(width: u32, height: u32, bands: u32) -> Result<Self> {
        let len = buffer_len(width, height, bands)?;
        Ok(Self {
            width,
            height,
            bands,
            data: vec![0; len],
        })
    }

    /// Wrap an existing sample vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len()` is not exactly
    /// `width * height * bands`.
    pub fn from_vec(width: u32, height: u32, bands: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height, bands)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bands,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in scanlines.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved bands per pixel.
    #[inline]
    pub fn bands(&self) -> u32 {
        self.bands
    }

    /// Bytes per scanline (`width * bands`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.bands as usize
    }

    /// All samples, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to all samples.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return its sample vector.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get scanline `y`.
    ///
    /// Returns `None` if `y` is out of bounds.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let len = self.row_len();
        let start = y as usize * len;
        Some(&self.data[start..start + len])
    }

    /// Get the sample of `band` at (x, y).
    ///
    /// Returns `None` if any coordinate is out of bounds.
    pub fn sample(&self, x: u32, y: u32, band: u32) -> Option<u8> {
        if x >= self.width || y >= self.height || band >= self.bands {
            return None;
        }
        Some(self.data[self.index(x, y, band)])
    }

    /// Set the sample of `band` at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any coordinate is out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, band: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height || band >= self.bands {
            return Err(Error::IndexOutOfBounds {
                index: self.index(x, y, band),
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y, band);
        self.data[idx] = val;
        Ok(())
    }

    /// Check whether `other` has the same width, height and band count.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.width == other.width && self.height == other.height && self.bands == other.bands
    }

    #[inline]
    fn index(&self, x: u32, y: u32, band: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.bands as usize + band as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let r = Raster::new(3, 2, 4).unwrap();
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.bands(), 4);
        assert_eq!(r.row_len(), 12);
        assert_eq!(r.data().len(), 24);
        assert!(r.data().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_new_rejects_zero_sizes() {
        assert!(matches!(
            Raster::new(0, 5, 1),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            Raster::new(5, 0, 1),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(Raster::new(5, 5, 0), Err(Error::InvalidBands(0))));
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Raster::from_vec(2, 2, 1, vec![1, 2, 3, 4]).is_ok());
        match Raster::from_vec(2, 2, 3, vec![0; 11]) {
            Err(Error::BufferSize { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_row_access() {
        let r = Raster::from_vec(2, 3, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(r.row(0), Some(&[1u8, 2][..]));
        assert_eq!(r.row(2), Some(&[5u8, 6][..]));
        assert_eq!(r.row(3), None);
    }

    #[test]
    fn test_sample_interleaved() {
        let mut r = Raster::new(2, 2, 3).unwrap();
        r.set_sample(1, 1, 2, 200).unwrap();
        assert_eq!(r.sample(1, 1, 2), Some(200));
        assert_eq!(r.data()[11], 200);
        assert_eq!(r.sample(2, 0, 0), None);
        assert_eq!(r.sample(0, 0, 3), None);
        assert!(r.set_sample(0, 2, 0, 1).is_err());
    }

    #[test]
    fn test_sizes_equal() {
        let a = Raster::new(4, 4, 1).unwrap();
        let b = Raster::from_vec(4, 4, 1, vec![17; 16]).unwrap();
        assert!(a.sizes_equal(&b));
        assert_ne!(a, b);
        assert_eq!(a, Raster::new(4, 4, 1).unwrap());
        assert!(!a.sizes_equal(&Raster::new(4, 4, 3).unwrap()));
    }
}
