//! Core types shared by the strip engine.

/// How often a throttled animation advances.
///
/// Periods are counted in control-loop ticks, not time units. The engine never
/// reads a clock, so an animation runs proportionally to the caller's loop
/// rate: at a 50 Hz loop `Fast` advances roughly twice per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// Advance every 50 ticks.
    #[default]
    Slow,

    /// Advance every 25 ticks.
    Fast,

    /// Advance every 10 ticks.
    VeryFast,

    /// Advance every tick.
    Ludicrous,
}

impl Speed {
    /// Number of holding ticks between two advances. Always non-zero.
    #[inline]
    pub const fn period(self) -> u32 {
        match self {
            Speed::Slow => 50,
            Speed::Fast => 25,
            Speed::VeryFast => 10,
            Speed::Ludicrous => 1,
        }
    }
}

/// Identifies an animation mode independently of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationKind {
    /// Fixed repeating fill.
    Static,

    /// Palette scrolling along the strip.
    Cycle,

    /// Short pattern travelling over a background.
    Snake,

    /// Hue sweep.
    Rainbow,
}

/// Result of a successful tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The buffer was rewritten for this tick.
    Advanced,

    /// The throttle held the animation; the previous frame was re-sent.
    Held,
}

/// Errors reported by the strip engine.
///
/// None of these are fatal. A tick that fails leaves the buffer as it was and
/// still re-sends it to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// A palette or snake pattern with no colors.
    EmptyPalette,

    /// The mode needs more colors than were supplied.
    PaletteTooShort {
        /// Minimum number of colors for the mode.
        required: usize,
        /// Number of colors supplied.
        actual: usize,
    },

    /// Owned palette storage is full.
    PaletteCapacityExceeded,

    /// The strip has no pixels.
    EmptyStrip,

    /// Pixel write outside the buffer.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Buffer length.
        len: usize,
    },
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::EmptyPalette => {
                write!(f, "palette must have at least one color")
            }
            StripError::PaletteTooShort { required, actual } => {
                write!(
                    f,
                    "palette needs at least {} colors, got {}",
                    required, actual
                )
            }
            StripError::PaletteCapacityExceeded => {
                write!(f, "palette capacity exceeded")
            }
            StripError::EmptyStrip => {
                write!(f, "strip has no pixels")
            }
            StripError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {} out of range for strip of {}", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}
