//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use shade_curve::{Channel, Shade};

use huepals::models::Theme;

/// Assert two values agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Assert the first and last shade sit on the curve endpoints
pub fn assert_ramp_endpoints(theme: &Theme, color_id: &str) {
    let color = theme.color(color_id).expect("color exists");
    let shades = theme.shades(color_id).expect("shades sample");
    let first = shades[0];
    let last = shades[shades.len() - 1];

    for channel in Channel::ALL {
        let curve = color.curve(channel);
        let bounds = channel.bounds();
        assert_eq!(
            channel_value(&first, channel),
            bounds.clamp(curve.start()),
            "{channel} start"
        );
        assert_eq!(
            channel_value(&last, channel),
            bounds.clamp(curve.end()),
            "{channel} end"
        );
    }
}

/// Assert every linked color of a theme has the same curve on `channel`
pub fn assert_linked_in_sync(theme: &Theme, channel: Channel) {
    let mut linked = theme.colors.iter().filter(|c| c.is_linked(channel));
    if let Some(first) = linked.next() {
        for other in linked {
            assert_eq!(
                other.curve(channel),
                first.curve(channel),
                "{} and {} disagree on {channel}",
                first.name,
                other.name
            );
        }
    }
}

pub fn channel_value(shade: &Shade, channel: Channel) -> f64 {
    match channel {
        Channel::Hue => shade.hue,
        Channel::Saturation => shade.chroma,
        Channel::Lightness => shade.lightness,
    }
}
