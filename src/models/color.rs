use serde::{Deserialize, Serialize};
use shade_curve::{sample, Channel, Curve, CurveError, Shade, SplineSet};

/// A fresh random identity for colors and themes
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn default_name() -> String {
    "Gray".to_string()
}

fn default_true() -> bool {
    true
}

/// A named color: three channel curves and their link flags
///
/// Shades are never stored; they are sampled from the curves on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    #[serde(default = "new_id")]
    pub id: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "SplineSet::default_hue")]
    pub hue_spline: Curve,

    #[serde(default = "SplineSet::default_saturation")]
    pub saturation_spline: Curve,

    #[serde(default = "SplineSet::default_lightness")]
    pub lightness_spline: Curve,

    #[serde(default)]
    pub hue_linked: bool,

    #[serde(default = "default_true")]
    pub saturation_linked: bool,

    #[serde(default = "default_true")]
    pub lightness_linked: bool,
}

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn curve(&self, channel: Channel) -> &Curve {
        match channel {
            Channel::Hue => &self.hue_spline,
            Channel::Saturation => &self.saturation_spline,
            Channel::Lightness => &self.lightness_spline,
        }
    }

    pub fn set_curve(&mut self, channel: Channel, curve: Curve) {
        match channel {
            Channel::Hue => self.hue_spline = curve,
            Channel::Saturation => self.saturation_spline = curve,
            Channel::Lightness => self.lightness_spline = curve,
        }
    }

    pub fn is_linked(&self, channel: Channel) -> bool {
        match channel {
            Channel::Hue => self.hue_linked,
            Channel::Saturation => self.saturation_linked,
            Channel::Lightness => self.lightness_linked,
        }
    }

    pub fn set_linked(&mut self, channel: Channel, linked: bool) {
        match channel {
            Channel::Hue => self.hue_linked = linked,
            Channel::Saturation => self.saturation_linked = linked,
            Channel::Lightness => self.lightness_linked = linked,
        }
    }

    pub fn splines(&self) -> SplineSet {
        SplineSet::new(
            self.hue_spline,
            self.saturation_spline,
            self.lightness_spline,
        )
    }

    /// Sample `count` shades from this color's curves
    pub fn shades(&self, count: usize) -> Result<Vec<Shade>, CurveError> {
        sample(&self.splines(), count)
    }

    /// Copy with a new identity
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_id(),
            ..self.clone()
        }
    }

    /// True if `selector` is this color's id or name
    pub fn matches(&self, selector: &str) -> bool {
        self.id == selector || self.name == selector
    }
}

impl Default for Color {
    fn default() -> Self {
        let splines = SplineSet::default();
        Self {
            id: new_id(),
            name: default_name(),
            hue_spline: splines.hue,
            saturation_spline: splines.saturation,
            lightness_spline: splines.lightness,
            hue_linked: false,
            saturation_linked: true,
            lightness_linked: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color() {
        let color = Color::default();

        assert_eq!(color.name, "Gray");
        assert!(!color.hue_linked);
        assert!(color.saturation_linked);
        assert!(color.lightness_linked);
        assert_eq!(color.splines(), SplineSet::default());
        assert_eq!(uuid::Uuid::parse_str(&color.id).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let color: Color = serde_json::from_str(r#"{"name": "Teal"}"#).unwrap();

        assert_eq!(color.name, "Teal");
        assert!(!color.id.is_empty());
        assert_eq!(color.hue_spline, SplineSet::default_hue());
        assert!(color.saturation_linked);
    }

    #[test]
    fn test_serialize_uses_snapshot_keys() {
        let color = Color::new("Red");
        let value = serde_json::to_value(&color).unwrap();

        for key in [
            "id",
            "name",
            "hueSpline",
            "saturationSpline",
            "lightnessSpline",
            "hueLinked",
            "saturationLinked",
            "lightnessLinked",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["lightnessSpline"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_deserialize_rejects_unpinned_curve() {
        let json = r#"{"hueSpline": [0.2, 10, 0.3, 10, 0.6, 20, 1, 20]}"#;
        assert!(serde_json::from_str::<Color>(json).is_err());
    }

    #[test]
    fn test_curve_and_link_accessors() {
        let mut color = Color::default();
        let curve = Curve::linear(0.1, 0.4);

        color.set_curve(Channel::Saturation, curve);
        color.set_linked(Channel::Hue, true);

        assert_eq!(*color.curve(Channel::Saturation), curve);
        assert!(color.is_linked(Channel::Hue));
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let color = Color::new("Blue");
        let copy = color.duplicate();

        assert_ne!(copy.id, color.id);
        assert_eq!(copy.name, color.name);
        assert_eq!(copy.splines(), color.splines());
    }

    #[test]
    fn test_shades_rejects_bad_count() {
        let color = Color::default();
        assert_eq!(color.shades(17).unwrap_err(), CurveError::SampleCount(17));
        assert_eq!(color.shades(10).unwrap().len(), 10);
    }
}
