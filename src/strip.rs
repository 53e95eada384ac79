//! Tick-driven animation engine for one addressable LED strip.
//!
//! Provides [`LedStrip`], which owns the strip's pixel buffer and per-mode
//! animation progress, and the [`LedTransport`] trait used to push finished
//! frames to hardware.
//!
//! The engine has no clock. The caller's fixed-rate control loop calls
//! [`LedStrip::tick`] once per cycle with the animation it wants shown; the
//! engine decides whether that animation advances, rewrites the buffer if it
//! does, and always hands the buffer to the transport before returning.

use crate::buffer::PixelBuffer;
use crate::colors::{self, BLACK, Color, HUE_WHEEL};
use crate::command::{Animation, StripCommand};
use crate::pattern::Palette;
use crate::throttle::{Throttle, ThrottleSignal};
use crate::types::{AnimationKind, Speed, StripError, TickOutcome};

/// Hue steps the rainbow moves per tick.
const RAINBOW_STEP: u16 = 3;

/// Saturation and value of rainbow pixels.
const RAINBOW_SATURATION: u8 = 255;
const RAINBOW_VALUE: u8 = 128;

/// Trait for abstracting addressable LED hardware.
///
/// Implement this for your strip driver (RMT, SPI, PIO, ...). The engine calls
/// [`write`](LedTransport::write) exactly once per tick with the whole frame.
pub trait LedTransport {
    /// Displays a complete frame, pixel 0 first.
    ///
    /// Must not block for long and cannot fail; handle hardware errors
    /// internally.
    fn write(&mut self, pixels: &[Color]);

    /// Enables output. Default does nothing.
    fn start(&mut self) {}

    /// Disables output. Default does nothing.
    fn stop(&mut self) {}
}

/// Per-mode animation progress. Only [`LedStrip`] writes it.
#[derive(Debug, Clone, Copy, Default)]
struct EngineState {
    palette_offset: usize,
    snake_head: usize,
    hue_offset: u16,
    cycle_throttle: Throttle,
    snake_throttle: Throttle,
}

/// Animates one LED strip of `N` pixels.
///
/// The strip exclusively owns its buffer. External code can read the current
/// frame through [`pixels`](Self::pixels) but can only change it by ticking an
/// animation, so a frame is never half-written when the transport sees it.
///
/// Exactly one animation runs per tick; there is no blending. When the
/// animation mode differs from the previous tick's, all per-mode progress is
/// reset first, so a mode always starts from its initial state.
///
/// # Type Parameters
/// * `T` - LED transport implementation
/// * `N` - Number of pixels on the strip
pub struct LedStrip<T: LedTransport, const N: usize> {
    transport: T,
    buffer: PixelBuffer<N>,
    state: EngineState,
    last_mode: Option<AnimationKind>,
    frame_count: u32,
}

impl<T: LedTransport, const N: usize> LedStrip<T, N> {
    /// Creates a strip with every pixel off and sends that frame once.
    pub fn new(mut transport: T) -> Self {
        let buffer = PixelBuffer::new();
        transport.write(buffer.as_slice());

        Self {
            transport,
            buffer,
            state: EngineState::default(),
            last_mode: None,
            frame_count: 0,
        }
    }

    /// Runs one control-loop cycle of `animation`.
    ///
    /// The buffer is always sent to the transport, whether the animation
    /// advanced, was held by its throttle, or was rejected.
    ///
    /// # Returns
    /// * `Ok(TickOutcome::Advanced)` - The buffer was rewritten
    /// * `Ok(TickOutcome::Held)` - The throttle is waiting; previous frame re-sent
    /// * `Err` - Invalid parameters; nothing changed and a warning was emitted
    pub fn tick(&mut self, animation: Animation<'_>) -> Result<TickOutcome, StripError> {
        let result = self.step(animation);
        self.finish(animation.kind(), result)
    }

    /// Ticks an owned command.
    pub fn handle_command<const L: usize>(
        &mut self,
        command: &StripCommand<L>,
    ) -> Result<TickOutcome, StripError> {
        self.tick(command.as_animation())
    }

    /// Fills the strip by repeating `colors` from pixel 0.
    pub fn set_color(&mut self, colors: &[Color]) -> Result<TickOutcome, StripError> {
        let result =
            Palette::new(colors).and_then(|palette| self.step(Animation::Static { palette }));
        self.finish(AnimationKind::Static, result)
    }

    /// Scrolls `colors` along the strip at `speed`. Needs at least two colors.
    pub fn set_moving_colors(
        &mut self,
        speed: Speed,
        colors: &[Color],
    ) -> Result<TickOutcome, StripError> {
        let result = Palette::new(colors)
            .and_then(|palette| self.step(Animation::Cycle { speed, palette }));
        self.finish(AnimationKind::Cycle, result)
    }

    /// Moves `pattern` over `background` at `speed`. Needs at least one color.
    pub fn do_snake(
        &mut self,
        speed: Speed,
        background: Color,
        pattern: &[Color],
    ) -> Result<TickOutcome, StripError> {
        let result = Palette::new(pattern).and_then(|pattern| {
            self.step(Animation::Snake {
                speed,
                background,
                pattern,
            })
        });
        self.finish(AnimationKind::Snake, result)
    }

    /// Shows a moving rainbow.
    pub fn do_rainbow(&mut self) -> Result<TickOutcome, StripError> {
        self.tick(Animation::Rainbow)
    }

    /// Turns the transport on.
    pub fn start(&mut self) {
        self.transport.start();
    }

    /// Turns the transport off. Animation state is kept.
    pub fn stop(&mut self) {
        self.transport.stop();
    }

    /// Forgets all animation progress and the last mode. Pixels are kept.
    pub fn reset(&mut self) {
        self.state = EngineState::default();
        self.last_mode = None;
    }

    /// Resets progress, blanks every pixel and sends the blank frame.
    pub fn clear(&mut self) {
        self.reset();
        self.buffer.fill(BLACK);
        self.transport.write(self.buffer.as_slice());
    }

    /// The frame most recently sent to the transport.
    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Mode of the last accepted tick.
    pub fn last_mode(&self) -> Option<AnimationKind> {
        self.last_mode
    }

    /// Palette position the next Cycle advance starts from.
    pub fn palette_offset(&self) -> usize {
        self.state.palette_offset
    }

    /// Pixel where the next Snake advance draws the pattern head.
    pub fn snake_head(&self) -> usize {
        self.state.snake_head
    }

    /// Hue of pixel 0 on the next Rainbow tick.
    pub fn hue_offset(&self) -> u16 {
        self.state.hue_offset
    }

    /// Number of ticks handled, wrapping on overflow.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the strip and returns the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn finish(
        &mut self,
        kind: AnimationKind,
        result: Result<TickOutcome, StripError>,
    ) -> Result<TickOutcome, StripError> {
        if let Err(err) = &result {
            warn!("{:?} tick skipped: {}", kind, err);
        }
        self.transport.write(self.buffer.as_slice());
        self.frame_count = self.frame_count.wrapping_add(1);
        result
    }

    fn step(&mut self, animation: Animation<'_>) -> Result<TickOutcome, StripError> {
        validate::<N>(&animation)?;
        self.enter_mode(animation.kind());

        let outcome = match animation {
            Animation::Static { palette } => self.fill_static(palette),
            Animation::Cycle { speed, palette } => self.advance_cycle(speed, palette),
            Animation::Snake {
                speed,
                background,
                pattern,
            } => self.advance_snake(speed, background, pattern),
            Animation::Rainbow => self.advance_rainbow(),
        };
        Ok(outcome)
    }

    fn enter_mode(&mut self, kind: AnimationKind) {
        if self.last_mode == Some(kind) {
            return;
        }
        if let Some(previous) = self.last_mode {
            debug!("strip mode {:?} -> {:?}, progress reset", previous, kind);
        }
        self.state = EngineState::default();
        self.last_mode = Some(kind);
    }

    fn fill_static(&mut self, palette: Palette<'_>) -> TickOutcome {
        for index in 0..N {
            self.write(index, palette.get(index));
        }
        TickOutcome::Advanced
    }

    fn advance_cycle(&mut self, speed: Speed, palette: Palette<'_>) -> TickOutcome {
        if self.state.cycle_throttle.poll(speed) == ThrottleSignal::Hold {
            return TickOutcome::Held;
        }

        let len = palette.len();
        // Pre-incremented before first use, so pixel 0 shows offset + 1.
        let mut rolling = self.state.palette_offset % len;
        for index in 0..N {
            rolling += 1;
            if rolling >= len {
                rolling = 0;
            }
            self.write(index, palette.get(rolling));
        }

        self.state.palette_offset = (self.state.palette_offset + 1) % len;
        TickOutcome::Advanced
    }

    fn advance_snake(
        &mut self,
        speed: Speed,
        background: Color,
        pattern: Palette<'_>,
    ) -> TickOutcome {
        if self.state.snake_throttle.poll(speed) == ThrottleSignal::Hold {
            return TickOutcome::Held;
        }

        let head = self.state.snake_head % N;
        let mut cursor = 0;
        while cursor < N {
            if cursor == head {
                for (offset, &color) in pattern.iter().enumerate() {
                    self.write((head + offset) % N, color);
                }
                // Skip the span just drawn.
                cursor = head + pattern.len();
            } else {
                self.write(cursor, background);
                cursor += 1;
            }
        }

        self.state.snake_head = (head + 1) % N;
        TickOutcome::Advanced
    }

    fn advance_rainbow(&mut self) -> TickOutcome {
        let wheel = usize::from(HUE_WHEEL);
        let first = usize::from(self.state.hue_offset);
        for index in 0..N {
            let hue = (first + index * wheel / N) % wheel;
            // hue < 180
            let color = colors::hsv(hue as u16, RAINBOW_SATURATION, RAINBOW_VALUE);
            self.write(index, color);
        }

        self.state.hue_offset = (self.state.hue_offset + RAINBOW_STEP) % HUE_WHEEL;
        TickOutcome::Advanced
    }

    fn write(&mut self, index: usize, color: Color) {
        if let Err(err) = self.buffer.set_pixel(index, color) {
            warn!("pixel write skipped: {}", err);
        }
    }
}

fn validate<const N: usize>(animation: &Animation<'_>) -> Result<(), StripError> {
    if N == 0 {
        return Err(StripError::EmptyStrip);
    }
    if let Animation::Cycle { palette, .. } = animation {
        if palette.len() < 2 {
            return Err(StripError::PaletteTooShort {
                required: 2,
                actual: palette.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, GREEN, RED};

    #[derive(Default)]
    struct CountingTransport {
        writes: usize,
        running: bool,
    }

    impl LedTransport for CountingTransport {
        fn write(&mut self, _pixels: &[Color]) {
            self.writes += 1;
        }

        fn start(&mut self) {
            self.running = true;
        }

        fn stop(&mut self) {
            self.running = false;
        }
    }

    #[test]
    fn new_sends_one_blank_frame() {
        let strip = LedStrip::<_, 5>::new(CountingTransport::default());
        assert_eq!(strip.transport().writes, 1);
        assert!(strip.pixels().iter().all(|&c| c == BLACK));
        assert_eq!(strip.last_mode(), None);
    }

    #[test]
    fn every_tick_writes_once() {
        let mut strip = LedStrip::<_, 5>::new(CountingTransport::default());
        strip.do_rainbow().unwrap();
        strip.set_moving_colors(Speed::Slow, &[RED, GREEN]).unwrap();
        strip.set_moving_colors(Speed::Slow, &[RED]).unwrap_err();
        assert_eq!(strip.transport().writes, 4);
        assert_eq!(strip.frame_count(), 3);
    }

    #[test]
    fn zero_length_strip_reports_and_survives() {
        let mut strip = LedStrip::<_, 0>::new(CountingTransport::default());
        assert_eq!(strip.do_rainbow(), Err(StripError::EmptyStrip));
        assert_eq!(strip.set_color(&[RED]), Err(StripError::EmptyStrip));
        assert_eq!(strip.last_mode(), None);
    }

    #[test]
    fn rejected_tick_does_not_change_mode() {
        let mut strip = LedStrip::<_, 5>::new(CountingTransport::default());
        strip.do_rainbow().unwrap();
        strip.do_snake(Speed::Fast, BLUE, &[]).unwrap_err();
        assert_eq!(strip.last_mode(), Some(AnimationKind::Rainbow));
        assert_eq!(strip.hue_offset(), 3);
    }

    #[test]
    fn start_and_stop_forward_to_transport() {
        let mut strip = LedStrip::<_, 3>::new(CountingTransport::default());
        strip.start();
        assert!(strip.transport().running);
        strip.stop();
        assert!(!strip.transport().running);
    }

    #[test]
    fn clear_blanks_and_forgets_progress() {
        let mut strip = LedStrip::<_, 4>::new(CountingTransport::default());
        strip.do_rainbow().unwrap();
        strip.clear();
        assert!(strip.pixels().iter().all(|&c| c == BLACK));
        assert_eq!(strip.hue_offset(), 0);
        assert_eq!(strip.last_mode(), None);
    }
}
