//! Non-empty color lists used as palettes and snake patterns.
//!
//! [`Palette`] is a borrowed view that is guaranteed to hold at least one
//! color, so the animation code never has to handle an empty list. Callers
//! that need to keep a palette around (for example to send it through a
//! channel) can build an owned [`PaletteBuf`] with fixed capacity.

use crate::colors::Color;
use crate::types::StripError;
use heapless::Vec;

/// An ordered, non-empty list of colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette<'a> {
    colors: &'a [Color],
}

impl<'a> Palette<'a> {
    /// Wraps a slice of colors.
    ///
    /// # Errors
    /// `EmptyPalette` if `colors` is empty.
    pub fn new(colors: &'a [Color]) -> Result<Self, StripError> {
        if colors.is_empty() {
            return Err(StripError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// A palette holding exactly one color.
    pub fn single(color: &'a Color) -> Self {
        Self {
            colors: core::slice::from_ref(color),
        }
    }

    /// Number of colors; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette cannot be constructed empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`, wrapping around the palette length.
    #[inline]
    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    #[inline]
    pub fn as_slice(&self) -> &'a [Color] {
        self.colors
    }

    pub fn iter(&self) -> core::slice::Iter<'a, Color> {
        self.colors.iter()
    }
}

impl<'a> TryFrom<&'a [Color]> for Palette<'a> {
    type Error = StripError;

    fn try_from(colors: &'a [Color]) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

/// Owned palette with room for up to `L` colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteBuf<const L: usize> {
    colors: Vec<Color, L>,
}

impl<const L: usize> PaletteBuf<L> {
    /// Creates a new palette builder.
    pub fn builder() -> PaletteBuilder<L> {
        PaletteBuilder::new()
    }

    /// Copies colors from a slice.
    ///
    /// # Errors
    /// `EmptyPalette` for an empty slice, `PaletteCapacityExceeded` if it holds
    /// more than `L` colors.
    pub fn from_slice(colors: &[Color]) -> Result<Self, StripError> {
        if colors.is_empty() {
            return Err(StripError::EmptyPalette);
        }
        let colors = Vec::from_slice(colors).map_err(|_| StripError::PaletteCapacityExceeded)?;
        Ok(Self { colors })
    }

    /// Borrows the stored colors as a [`Palette`].
    pub fn as_palette(&self) -> Palette<'_> {
        Palette {
            colors: &self.colors,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

/// Builder for [`PaletteBuf`].
#[derive(Debug)]
pub struct PaletteBuilder<const L: usize> {
    colors: Vec<Color, L>,
}

impl<const L: usize> PaletteBuilder<L> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Appends a color.
    ///
    /// # Errors
    /// `PaletteCapacityExceeded` once `L` colors have been added.
    pub fn color(mut self, color: Color) -> Result<Self, StripError> {
        self.colors
            .push(color)
            .map_err(|_| StripError::PaletteCapacityExceeded)?;
        Ok(self)
    }

    /// Finishes the palette.
    ///
    /// # Errors
    /// `EmptyPalette` if no color was added.
    pub fn build(self) -> Result<PaletteBuf<L>, StripError> {
        if self.colors.is_empty() {
            return Err(StripError::EmptyPalette);
        }
        Ok(PaletteBuf {
            colors: self.colors,
        })
    }
}

impl<const L: usize> Default for PaletteBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
