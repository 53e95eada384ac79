//! Tick-count clock divider.

use crate::types::Speed;

/// Decision returned by [`Throttle::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThrottleSignal {
    /// Run one animation step now.
    Advance,

    /// Keep the current frame.
    Hold,
}

/// Converts a [`Speed`] into advance/hold decisions by counting calls.
///
/// Each call either increments the counter (`Hold`) or, once the counter has
/// reached the speed's period, resets it to zero (`Advance`). From a fresh
/// counter the first `period` calls hold and the next one advances. The result
/// depends only on how many times `poll` was called, never on elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Throttle {
    counter: u32,
}

impl Throttle {
    /// Creates a throttle with a zeroed counter.
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Registers one tick at the given speed.
    pub fn poll(&mut self, speed: Speed) -> ThrottleSignal {
        // A count already past a shorter period fires on this call.
        if self.counter >= speed.period() {
            self.counter = 0;
            ThrottleSignal::Advance
        } else {
            self.counter += 1;
            ThrottleSignal::Hold
        }
    }

    /// Ticks counted since the last advance.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Zeroes the counter.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_holds_25_times_then_advances() {
        let mut throttle = Throttle::new();
        for _ in 0..25 {
            assert_eq!(throttle.poll(Speed::Fast), ThrottleSignal::Hold);
        }
        assert_eq!(throttle.counter(), 25);
        assert_eq!(throttle.poll(Speed::Fast), ThrottleSignal::Advance);
        assert_eq!(throttle.counter(), 0);
    }

    #[test]
    fn ludicrous_advances_every_other_call() {
        let mut throttle = Throttle::new();
        let signals: [ThrottleSignal; 4] =
            core::array::from_fn(|_| throttle.poll(Speed::Ludicrous));
        assert_eq!(
            signals,
            [
                ThrottleSignal::Hold,
                ThrottleSignal::Advance,
                ThrottleSignal::Hold,
                ThrottleSignal::Advance,
            ]
        );
    }

    #[test]
    fn shorter_period_fires_when_counter_already_past_it() {
        let mut throttle = Throttle::new();
        for _ in 0..30 {
            throttle.poll(Speed::Slow);
        }
        assert_eq!(throttle.poll(Speed::Fast), ThrottleSignal::Advance);
    }

    #[test]
    fn reset_restarts_the_period() {
        let mut throttle = Throttle::new();
        for _ in 0..9 {
            throttle.poll(Speed::VeryFast);
        }
        throttle.reset();
        for _ in 0..10 {
            assert_eq!(throttle.poll(Speed::VeryFast), ThrottleSignal::Hold);
        }
        assert_eq!(throttle.poll(Speed::VeryFast), ThrottleSignal::Advance);
    }
}
