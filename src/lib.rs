#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LedStrip`**: Owns one strip's pixel buffer and animates it one tick at a time
//! - **`LedTransport`**: Trait to implement for your strip hardware
//! - **`Animation`**: The mode to show this tick (`Static`, `Cycle`, `Snake`, `Rainbow`)
//! - **`Speed`**: How many ticks a throttled animation waits between advances
//! - **`Palette`**: A non-empty, ordered list of colors
//! - **`PixelBuffer`**: The fixed-length frame handed to the transport
//! - **`StripCommand`**: Owned animation request for sending between tasks
//!
//! Colors are 8-bit sRGB (`Srgb<u8>`) and compare by value. Hues use a
//! 180-point wheel; see [`colors`].

// Must stay first so the diagnostic macros are visible to every module below.
#[macro_use]
mod fmt;

pub use palette::Srgb;

pub mod buffer;
pub mod colors;
pub mod command;
pub mod pattern;
pub mod strip;
pub mod throttle;
pub mod types;

#[cfg(feature = "smart-leds")]
pub mod transport;

pub use buffer::PixelBuffer;
pub use colors::{BLACK, BLUE, COLOR_OFF, Color, GREEN, HUE_WHEEL, RED, WHITE};
pub use command::{Animation, StripCommand};
pub use pattern::{Palette, PaletteBuf, PaletteBuilder};
pub use strip::{LedStrip, LedTransport};
pub use throttle::{Throttle, ThrottleSignal};
pub use types::{AnimationKind, Speed, StripError, TickOutcome};

#[cfg(feature = "smart-leds")]
pub use transport::SmartLedsTransport;

/// Default strip length: a standard 5 m strip at 30 pixels per meter.
pub const DEFAULT_STRIP_LEN: usize = 150;

/// A strip of [`DEFAULT_STRIP_LEN`] pixels.
pub type DefaultStrip<T> = LedStrip<T, DEFAULT_STRIP_LEN>;
