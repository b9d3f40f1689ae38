//! Conversion of legacy HSL snapshots to OKLCH curves.
//!
//! The HSL editor stored saturation and lightness in 0..100 and hue in
//! degrees under version "1.0". Early OKLCH builds wrote the same version
//! tag, so a "1.0" snapshot is only treated as HSL when one of its
//! saturation or lightness control values lies outside the OKLCH bounds.

use shade_curve::{Channel, CurveError, Hsl, Oklch, Srgb};

use super::persistence::{Snapshot, CURRENT_VERSION, LEGACY_VERSION};
use crate::error::PersistenceError;
use crate::models::Color;

/// Whether `snapshot` holds HSL curves that must be converted
pub fn needs_migration(snapshot: &Snapshot) -> Result<bool, PersistenceError> {
    match snapshot.version.as_str() {
        CURRENT_VERSION => Ok(false),
        LEGACY_VERSION => Ok(snapshot
            .themes
            .iter()
            .flat_map(|t| t.colors.iter())
            .any(has_legacy_values)),
        other => Err(PersistenceError::UnsupportedVersion(other.to_string())),
    }
}

/// Whether a saturation or lightness control value exceeds the OKLCH bounds
///
/// HSL values at or under the bounds (saturation up to 0.5 and lightness up
/// to 1 on the 0..100 scale) look like valid OKLCH, so a "1.0" snapshot made
/// only of such near-black grays is read as OKLCH. One out-of-bounds color
/// anywhere in the snapshot converts all of them.
fn has_legacy_values(color: &Color) -> bool {
    [Channel::Saturation, Channel::Lightness]
        .into_iter()
        .any(|channel| {
            let bounds = channel.bounds();
            color
                .curve(channel)
                .y_values()
                .iter()
                .any(|&y| y > bounds.max)
        })
}

/// Convert every color of `snapshot` in place and stamp the current version
pub fn migrate(snapshot: &mut Snapshot) -> Result<(), PersistenceError> {
    let mut converted = 0;
    for theme in snapshot.themes.iter_mut() {
        for color in theme.colors.iter_mut() {
            migrate_color(color)?;
            converted += 1;
        }
    }
    tracing::info!(
        from = %snapshot.version,
        to = CURRENT_VERSION,
        colors = converted,
        "Migrated legacy HSL state"
    );
    snapshot.version = CURRENT_VERSION.to_string();
    Ok(())
}

/// Rewrite one color's HSL curves as OKLCH curves
///
/// Control point `k` of the three curves is read as one HSL color and
/// converted; `x` coordinates are kept. Hues are unwrapped along the curve
/// so neighbouring points stay on the same turn of the wheel.
pub fn migrate_color(color: &mut Color) -> Result<(), CurveError> {
    let hue = color.hue_spline.y_values();
    let saturation = color.saturation_spline.y_values();
    let lightness = color.lightness_spline.y_values();

    let converted: Vec<Oklch> = (0..4)
        .map(|k| {
            let hsl = Hsl::new(hue[k], saturation[k] / 100.0, lightness[k] / 100.0);
            Oklch::from(Srgb::from(hsl))
        })
        .collect();
    let hues = unwrap_hues(&converted);

    let lightness_spline = color.lightness_spline.map_y(|k, _| converted[k].l)?;
    let saturation_spline = color.saturation_spline.map_y(|k, _| converted[k].c)?;
    let hue_spline = color.hue_spline.map_y(|k, _| hues[k])?;

    color.lightness_spline = lightness_spline;
    color.saturation_spline = saturation_spline;
    color.hue_spline = hue_spline;
    Ok(())
}

/// Continuous hue values within the hue bounds
///
/// Gray points take the hue of the nearest colorful point before them, or
/// after them at the start of the curve.
fn unwrap_hues(points: &[Oklch]) -> Vec<f64> {
    let max = Channel::Hue.bounds().max;
    let first = points
        .iter()
        .find(|p| !p.is_achromatic())
        .map(|p| p.h)
        .unwrap_or(0.0);

    let mut previous = first;
    points
        .iter()
        .map(|p| {
            if p.is_achromatic() {
                return previous;
            }
            let mut hue = p.h;
            while hue - previous > 180.0 {
                hue -= 360.0;
            }
            while previous - hue > 180.0 {
                hue += 360.0;
            }
            if hue < 0.0 {
                hue += 360.0;
            }
            if hue > max {
                hue -= 360.0;
            }
            previous = hue;
            hue
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use shade_curve::Curve;

    fn legacy_color() -> Color {
        let mut color = Color::new("Red");
        color.hue_spline = Curve::linear(0.0, 0.0);
        color.saturation_spline = Curve::linear(100.0, 100.0);
        color.lightness_spline = Curve::linear(50.0, 50.0);
        color
    }

    fn snapshot(version: &str, colors: Vec<Color>) -> Snapshot {
        Snapshot {
            version: version.to_string(),
            themes: vec![Theme {
                colors,
                ..Theme::default()
            }],
            saved_at: None,
        }
    }

    #[test]
    fn test_version_detection() {
        assert!(!needs_migration(&snapshot("2.0", vec![legacy_color()])).unwrap());
        assert!(needs_migration(&snapshot("1.0", vec![legacy_color()])).unwrap());
        assert!(!needs_migration(&snapshot("1.0", vec![Color::default()])).unwrap());
        assert!(matches!(
            needs_migration(&snapshot("3.0", vec![])),
            Err(PersistenceError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_near_black_hsl_reads_as_oklch() {
        let mut near_black = Color::new("Ink");
        near_black.saturation_spline = Curve::linear(0.5, 0.0);
        near_black.lightness_spline = Curve::linear(1.0, 0.2);
        assert!(!needs_migration(&snapshot("1.0", vec![near_black.clone()])).unwrap());

        // A single clearly HSL sibling converts the whole snapshot
        let mixed = snapshot("1.0", vec![near_black, legacy_color()]);
        assert!(needs_migration(&mixed).unwrap());
    }

    #[test]
    fn test_migrate_red() {
        let mut color = legacy_color();
        migrate_color(&mut color).unwrap();

        for &l in &color.lightness_spline.y_values() {
            assert!((l - 0.62796).abs() < 1e-4, "l = {l}");
        }
        for &c in &color.saturation_spline.y_values() {
            assert!((c - 0.25768).abs() < 1e-4, "c = {c}");
        }
        for &h in &color.hue_spline.y_values() {
            assert!((h - 29.234).abs() < 1e-2, "h = {h}");
        }
        assert_eq!(color.shades(3).unwrap()[1].hex(), "#ff0000");
    }

    #[test]
    fn test_migrate_keeps_x_coordinates() {
        let mut color = legacy_color();
        color.lightness_spline =
            Curve::new([0.0, 90.0, 0.2, 60.0, 0.7, 30.0, 1.0, 10.0]).unwrap();
        migrate_color(&mut color).unwrap();

        let points = color.lightness_spline.points();
        assert_eq!([points[0], points[2], points[4], points[6]], [0.0, 0.2, 0.7, 1.0]);
        // lighter to darker is preserved
        assert!(points[1] > points[3] && points[3] > points[5] && points[5] > points[7]);
    }

    #[test]
    fn test_unwrap_hues_stays_continuous() {
        let points = [
            Oklch::new(0.6, 0.2, 350.0),
            Oklch::new(0.6, 0.2, 10.0),
            Oklch::new(0.6, 0.0, 0.0),
            Oklch::new(0.6, 0.2, 40.0),
        ];
        assert_eq!(unwrap_hues(&points), vec![350.0, 370.0, 370.0, 400.0]);
    }

    #[test]
    fn test_unwrap_hues_all_gray() {
        let points = [Oklch::new(0.5, 0.0, 0.0); 4];
        assert_eq!(unwrap_hues(&points), vec![0.0; 4]);
    }

    #[test]
    fn test_migrate_stamps_current_version() {
        let mut snap = snapshot("1.0", vec![legacy_color(), legacy_color()]);
        migrate(&mut snap).unwrap();
        assert_eq!(snap.version, CURRENT_VERSION);
        assert!(!needs_migration(&snap).unwrap());
    }
}
