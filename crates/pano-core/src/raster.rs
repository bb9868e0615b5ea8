//! RGBA raster buffer.
//!
//! [`Raster`] is the only pixel container in pano-rs: an owned, row-major,
//! interleaved 8-bit RGBA buffer.
//!
//! # Memory Layout
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0 (stride = width * 4 bytes)
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Invariants
//!
//! - `width > 0` and `height > 0`
//! - `data.len() == width * height * 4`
//!
//! Both are checked by every constructor, so code holding a `Raster` can
//! index rows and pixels without re-validating.
//!
//! # Usage
//!
//! ```rust
//! use pano_core::Raster;
//!
//! let mut img = Raster::filled(8, 4, [255, 0, 0, 255]).unwrap();
//! img.set_pixel(1, 1, [0, 0, 255, 255]);
//! assert_eq!(img.pixel(1, 1), [0, 0, 255, 255]);
//! assert_eq!(img.data().len(), 8 * 4 * 4);
//! ```

use crate::{Error, Result};

/// Number of interleaved channels (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned 8-bit RGBA image buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Computes `width * height * 4`, rejecting zero sizes and overflow.
fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows"))
}

impl Raster {
    /// Creates a zero-filled (transparent black) raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero width or height.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Creates a raster where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&rgba);
        }
        Ok(Self { width, height, data })
    }

    /// Wraps an existing interleaved RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::buffer_size(expected, data.len()));
        }
        Ok(Self { width, height, data })
    }

    /// Builds a raster from interleaved RGB bytes, adding an opaque alpha channel.
    pub fn from_rgb8(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let expected = byte_len(width, height)? / CHANNELS * 3;
        if rgb.len() != expected {
            return Err(Error::buffer_size(expected, rgb.len()));
        }
        let data = rgb
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect();
        Ok(Self { width, height, data })
    }

    /// Builds a raster from 8-bit grayscale, replicating luma into R, G and B.
    pub fn from_luma8(width: u32, height: u32, luma: &[u8]) -> Result<Self> {
        let expected = byte_len(width, height)? / CHANNELS;
        if luma.len() != expected {
            return Err(Error::buffer_size(expected, luma.len()));
        }
        let data = luma.iter().flat_map(|&g| [g, g, g, 255]).collect();
        Ok(Self { width, height, data })
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw RGBA bytes mutably. The length cannot change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Returns the color channels only, dropping alpha.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(CHANNELS)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let img = Raster::new(3, 2).unwrap();
        assert_eq!(img.data().len(), 3 * 2 * 4);
        assert!(img.data().iter().all(|&b| b == 0));
        assert_eq!(img.stride(), 12);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Raster::new(0, 4),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Raster::filled(4, 0, [0; 4]),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_rgba8_checks_length() {
        let err = Raster::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(err, Error::buffer_size(16, 15));
        assert!(Raster::from_rgba8(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn test_from_rgb8_adds_alpha() {
        let img = Raster::from_rgb8(2, 1, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.pixel(0, 0), [1, 2, 3, 255]);
        assert_eq!(img.pixel(1, 0), [4, 5, 6, 255]);
    }

    #[test]
    fn test_from_luma8_replicates() {
        let img = Raster::from_luma8(1, 2, &[10, 20]).unwrap();
        assert_eq!(img.pixel(0, 1), [20, 20, 20, 255]);
    }

    #[test]
    fn test_pixel_access_and_offsets() {
        let mut img = Raster::filled(4, 3, [1, 2, 3, 4]).unwrap();
        img.set_pixel(3, 2, [9, 9, 9, 9]);
        assert_eq!(img.pixel(3, 2), [9, 9, 9, 9]);
        assert_eq!(img.pixel(0, 0), [1, 2, 3, 4]);
        let i = img.offset(3, 2);
        assert_eq!(i, (2 * 4 + 3) * CHANNELS);
        assert_eq!(&img.data()[i..i + CHANNELS], &[9, 9, 9, 9]);
        assert_eq!(img.pixel_count(), 12);
        assert_eq!(img.to_rgb8().len(), 4 * 3 * 3);
    }
}
