//! Pixel colors and the 180-point hue wheel.
//!
//! A [`Color`] is an 8-bit sRGB triple. Colors compare by channel value, so a
//! color built from an RGB literal equals one produced by [`hsv`] whenever the
//! channels agree.
//!
//! # Hue wheel
//!
//! Hues here live on a **180-point** wheel, not the usual 360 degrees: one hue
//! step is two degrees, `0` is red, `60` is green, `120` is blue, and values
//! wrap modulo [`HUE_WHEEL`]. The rainbow animation's sweep is defined on this
//! wheel; feeding it 360-point hues changes the animation.

use palette::Srgb;

/// An 8-bit sRGB pixel color.
pub type Color = Srgb<u8>;

/// Number of points on the hue wheel.
pub const HUE_WHEEL: u16 = 180;

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const MAGENTA: Color = Color::new(255, 0, 255);

/// Color of an unlit pixel.
pub const COLOR_OFF: Color = BLACK;

/// Creates a color from hue, saturation and value.
///
/// `hue` is taken modulo 180 (see the module docs), `saturation` and `value`
/// span the full 0-255 range. The wheel is split into six 30-point regions and
/// each channel is computed in 8-bit fixed point, so results are exact bytes
/// rather than rounded floats: `hsv(15, 255, 128)` is `(128, 45, 0)`.
pub fn hsv(hue: u16, saturation: u8, value: u8) -> Color {
    if saturation == 0 {
        return Color::new(value, value, value);
    }

    let hue = hue % HUE_WHEEL;
    let (s, v) = (u16::from(saturation), u16::from(value));
    let region = hue / 30;
    // 0..=174 across a region
    let remainder = (hue - region * 30) * 6;

    // Every product fits u16 (255 * 255) and every shifted result fits u8.
    let p = ((v * (255 - s)) >> 8) as u8;
    let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
    let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;

    match region {
        0 => Color::new(value, t, p),
        1 => Color::new(q, value, p),
        2 => Color::new(p, value, t),
        3 => Color::new(p, q, value),
        4 => Color::new(t, p, value),
        _ => Color::new(value, p, q),
    }
}

/// Creates a fully saturated, full-brightness color from a hue.
#[inline]
pub fn hue(hue: u16) -> Color {
    hsv(hue, 255, 255)
}
