//! Turns a color's spline set into an evenly spaced ramp of shades.

use crate::channel::Channel;
use crate::curve::SplineSet;
use crate::error::CurveError;
use crate::shade::Shade;

/// Smallest ramp a color can be sampled into.
pub const MIN_SAMPLES: usize = 3;

/// Largest ramp a color can be sampled into.
pub const MAX_SAMPLES: usize = 16;

/// Sample `count` shades evenly across the curve domain.
///
/// Shade `i` is taken at position `i / (count - 1)`, so index 0 is the
/// start value of every channel and index `count - 1` the end value. Each
/// channel value is clamped into [`Channel::bounds`]. The result is a pure
/// function of the curves and `count`.
///
/// # Errors
///
/// [`CurveError::SampleCount`] when `count` is outside
/// [`MIN_SAMPLES`]`..=`[`MAX_SAMPLES`]; nothing is sampled in that case.
///
/// # Example
///
/// ```
/// use shade_curve::{sample, SplineSet};
///
/// let splines = SplineSet::default();
/// let shades = sample(&splines, 10).unwrap();
/// assert_eq!(shades.len(), 10);
/// assert_eq!(shades[0].lightness, splines.lightness.start());
/// assert!(sample(&splines, 2).is_err());
/// ```
pub fn sample(splines: &SplineSet, count: usize) -> Result<Vec<Shade>, CurveError> {
    if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&count) {
        return Err(CurveError::SampleCount(count));
    }

    let last = (count - 1) as f64;
    let channel_at = |channel: Channel, position: f64| {
        channel
            .bounds()
            .clamp(splines.curve(channel).value_at(position))
    };

    Ok((0..count)
        .map(|i| {
            let position = i as f64 / last;
            Shade::new(
                i,
                channel_at(Channel::Lightness, position),
                channel_at(Channel::Saturation, position),
                channel_at(Channel::Hue, position),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curve;

    #[test]
    fn test_rejects_out_of_range_counts() {
        let splines = SplineSet::default();
        assert_eq!(sample(&splines, 0).unwrap_err(), CurveError::SampleCount(0));
        assert_eq!(sample(&splines, 2).unwrap_err(), CurveError::SampleCount(2));
        assert_eq!(sample(&splines, 17).unwrap_err(), CurveError::SampleCount(17));
    }

    #[test]
    fn test_indices_are_sequential() {
        let shades = sample(&SplineSet::default(), 7).unwrap();
        let indices: Vec<_> = shades.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_values_are_clamped_into_bounds() {
        let splines = SplineSet::new(
            Curve::linear(-40.0, 600.0),
            Curve::linear(-1.0, 2.0),
            Curve::linear(1.5, -0.5),
        );
        let shades = sample(&splines, 5).unwrap();

        assert_eq!(shades[0].hue, 0.0);
        assert_eq!(shades[4].hue, 480.0);
        assert_eq!(shades[0].chroma, 0.0);
        assert_eq!(shades[4].chroma, 0.5);
        assert_eq!(shades[0].lightness, 1.0);
        assert_eq!(shades[4].lightness, 0.0);
        for shade in &shades {
            assert!(Channel::Hue.bounds().contains(shade.hue));
            assert!(Channel::Saturation.bounds().contains(shade.chroma));
            assert!(Channel::Lightness.bounds().contains(shade.lightness));
        }
    }

    #[test]
    fn test_midpoint_of_linear_ramp() {
        let splines = SplineSet::new(
            Curve::linear(200.0, 300.0),
            Curve::linear(0.0, 0.2),
            Curve::linear(1.0, 0.0),
        );
        let shades = sample(&splines, 3).unwrap();
        assert!((shades[1].hue - 250.0).abs() < 1e-9);
        assert!((shades[1].chroma - 0.1).abs() < 1e-9);
        assert!((shades[1].lightness - 0.5).abs() < 1e-9);
    }
}
