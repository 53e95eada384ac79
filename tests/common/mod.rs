//! Shared test infrastructure for strip-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_animator::{Color, LedTransport};

// ============================================================================
// Mock Transport
// ============================================================================

/// Mock transport that records every frame it is handed
pub struct MockTransport<const N: usize> {
    frames: heapless::Vec<[Color; N], 64>,
    writes: usize,
    running: bool,
}

impl<const N: usize> MockTransport<N> {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            writes: 0,
            running: false,
        }
    }

    /// Total number of writes, including ones past the history capacity
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn last_frame(&self) -> Option<&[Color; N]> {
        self.frames.last()
    }

    pub fn frames(&self) -> &[[Color; N]] {
        &self.frames
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl<const N: usize> LedTransport for MockTransport<N> {
    fn write(&mut self, pixels: &[Color]) {
        self.writes += 1;
        let mut frame = [Color::new(0, 0, 0); N];
        frame.copy_from_slice(pixels);
        let _ = self.frames.push(frame);
    }

    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use strip_animator::{BLACK, BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Ticks `f` until it reports an advance, returning how many ticks held first
pub fn ticks_until_advance<F>(mut f: F) -> usize
where
    F: FnMut() -> strip_animator::TickOutcome,
{
    let mut held = 0;
    while f() == strip_animator::TickOutcome::Held {
        held += 1;
        assert!(held <= 1000, "animation never advanced");
    }
    held
}
