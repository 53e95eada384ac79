//! Fixed-length frame storage.

use crate::colors::{BLACK, Color};
use crate::types::StripError;

/// One frame of pixel colors for a strip of `N` pixels.
///
/// The length is part of the type, so it is fixed for the buffer's lifetime.
/// Writes only change memory; pushing a frame to hardware is the transport's
/// job.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Color; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Creates a buffer with every pixel off.
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true for a zero-length strip.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Writes one pixel.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index >= N`; the buffer is left untouched.
    pub fn set_pixel(&mut self, index: usize, color: Color) -> Result<(), StripError> {
        let slot = self
            .pixels
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len: N })?;
        *slot = color;
        Ok(())
    }

    /// Returns the pixel at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.pixels.get(index).copied()
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// The frame as a slice, in strip order.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Color> {
        self.pixels.iter()
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::ops::Index<usize> for PixelBuffer<N> {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.pixels[index]
    }
}

impl<'a, const N: usize> IntoIterator for &'a PixelBuffer<N> {
    type Item = &'a Color;
    type IntoIter = core::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}
