//! Animation requests passed to the strip engine.

use crate::colors::Color;
use crate::pattern::{Palette, PaletteBuf};
use crate::types::{AnimationKind, Speed};

/// One animation mode with its parameters, borrowed for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation<'a> {
    /// Repeat the palette along the strip. Not throttled.
    Static { palette: Palette<'a> },

    /// Scroll the palette one step per advance. Needs at least two colors.
    Cycle { speed: Speed, palette: Palette<'a> },

    /// Move `pattern` one pixel per advance over a `background` fill.
    Snake {
        speed: Speed,
        background: Color,
        pattern: Palette<'a>,
    },

    /// Sweep the hue wheel along the strip. Not throttled.
    Rainbow,
}

impl Animation<'_> {
    /// The mode, without parameters.
    pub fn kind(&self) -> AnimationKind {
        match self {
            Animation::Static { .. } => AnimationKind::Static,
            Animation::Cycle { .. } => AnimationKind::Cycle,
            Animation::Snake { .. } => AnimationKind::Snake,
            Animation::Rainbow => AnimationKind::Rainbow,
        }
    }
}

/// Owned counterpart of [`Animation`] for queueing between tasks.
///
/// Palettes are stored inline with room for `L` colors.
#[derive(Debug, Clone, PartialEq)]
pub enum StripCommand<const L: usize> {
    /// See [`Animation::Static`].
    Static(PaletteBuf<L>),
    /// See [`Animation::Cycle`].
    Cycle(Speed, PaletteBuf<L>),
    /// See [`Animation::Snake`].
    Snake {
        speed: Speed,
        background: Color,
        pattern: PaletteBuf<L>,
    },
    /// See [`Animation::Rainbow`].
    Rainbow,
}

impl<const L: usize> StripCommand<L> {
    /// Borrows the command as an [`Animation`].
    pub fn as_animation(&self) -> Animation<'_> {
        match self {
            StripCommand::Static(palette) => Animation::Static {
                palette: palette.as_palette(),
            },
            StripCommand::Cycle(speed, palette) => Animation::Cycle {
                speed: *speed,
                palette: palette.as_palette(),
            },
            StripCommand::Snake {
                speed,
                background,
                pattern,
            } => Animation::Snake {
                speed: *speed,
                background: *background,
                pattern: pattern.as_palette(),
            },
            StripCommand::Rainbow => Animation::Rainbow,
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.as_animation().kind()
    }
}
