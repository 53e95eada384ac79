//! [`LedTransport`] adapter for `smart-leds` drivers.

use crate::colors::Color;
use crate::strip::LedTransport;
use smart_leds::{RGB8, SmartLedsWrite, brightness};

/// Drives any `smart-leds` writer (WS2812 over SPI, RMT, PIO, ...) as a strip
/// transport.
///
/// While stopped, frames are dropped and the strip is held dark.
pub struct SmartLedsTransport<W> {
    writer: W,
    brightness: u8,
    enabled: bool,
    frame_len: usize,
}

impl<W> SmartLedsTransport<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps a writer at full brightness, enabled.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: u8::MAX,
            enabled: true,
            frame_len: 0,
        }
    }

    /// Sets global brightness, applied on the next frame.
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn push<I>(&mut self, colors: I)
    where
        I: Iterator<Item = RGB8>,
    {
        if self.writer.write(brightness(colors, self.brightness)).is_err() {
            warn!("smart-leds write failed, frame dropped");
        }
    }
}

impl<W> LedTransport for SmartLedsTransport<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write(&mut self, pixels: &[Color]) {
        if !self.enabled {
            return;
        }
        self.frame_len = pixels.len();
        self.push(pixels.iter().map(|c| RGB8::new(c.red, c.green, c.blue)));
    }

    fn start(&mut self) {
        self.enabled = true;
    }

    fn stop(&mut self) {
        self.enabled = false;
        self.push(core::iter::repeat(RGB8::default()).take(self.frame_len));
    }
}
