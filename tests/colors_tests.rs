//! Integration tests for colors module

use strip_animator::Color;
use strip_animator::colors::{self, BLUE, GREEN, RED};

#[test]
fn rgb_literals_compare_by_value() {
    let a = Color::new(12, 34, 56);
    let b = Color::new(12, 34, 56);
    assert_eq!(a, b);
    assert_ne!(a, Color::new(12, 34, 57));
}

#[test]
fn hsv_and_rgb_paths_agree() {
    assert_eq!(colors::hsv(0, 255, 255), Color::new(255, 0, 0));
    assert_eq!(colors::hue(0), RED);
    assert_eq!(colors::hsv(60, 255, 255), GREEN);
    assert_eq!(colors::hsv(120, 255, 255), BLUE);
}

#[test]
fn secondary_hues_fall_one_short_of_full() {
    // Fixed-point rounding leaves the rising channel at 254 on region boundaries.
    assert_eq!(colors::hue(30), Color::new(254, 255, 0));
    assert_eq!(colors::hue(90), Color::new(0, 254, 255));
    assert_eq!(colors::hue(150), Color::new(255, 0, 254));
}

#[test]
fn rainbow_brightness_hues_are_pinned() {
    assert_eq!(colors::hsv(15, 255, 128), Color::new(128, 45, 0));
    assert_eq!(colors::hsv(30, 255, 128), Color::new(127, 128, 0));
    assert_eq!(colors::hsv(100, 255, 128), Color::new(0, 98, 128));
    assert_eq!(colors::hsv(150, 255, 128), Color::new(128, 0, 127));
}

#[test]
fn hue_wheel_has_180_points() {
    assert_eq!(colors::HUE_WHEEL, 180);
    for h in 0..180 {
        assert_eq!(colors::hue(h), colors::hue(h + 180), "hue {}", h);
    }
}

#[test]
fn value_scales_brightness() {
    assert_eq!(colors::hsv(0, 255, 128), Color::new(128, 0, 0));
    assert_eq!(colors::hsv(0, 255, 0), Color::new(0, 0, 0));
}
