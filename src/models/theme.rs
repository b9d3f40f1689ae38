use serde::{Deserialize, Serialize};
use shade_curve::{Channel, Curve, Easing, Endpoint, Oklch, Shade, Srgb, MAX_SAMPLES, MIN_SAMPLES};

use super::color::{new_id, Color};
use crate::error::StoreError;

/// Shade count for new themes
pub const DEFAULT_INTERPOLATION_COUNT: usize = 10;

fn default_name() -> String {
    "New Theme".to_string()
}

fn default_colors() -> Vec<Color> {
    vec![Color::default()]
}

fn default_interpolation_count() -> usize {
    DEFAULT_INTERPOLATION_COUNT
}

/// An ordered set of colors sampled at a shared shade count
///
/// Color order is significant: it is the display and export order.
/// All edits address colors by id; linked channels are kept in sync by
/// iterating this theme's own colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default = "new_id")]
    pub id: String,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default = "default_colors")]
    pub colors: Vec<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color_id: Option<String>,

    #[serde(default = "default_interpolation_count")]
    pub interpolation_count: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_shade_index: Option<usize>,
}

impl Theme {
    /// A theme holding one default color
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True if `selector` is this theme's id or name
    pub fn matches(&self, selector: &str) -> bool {
        self.id == selector || self.name == selector
    }

    pub fn color(&self, id: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    fn color_mut(&mut self, id: &str) -> Result<&mut Color, StoreError> {
        self.colors
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::ColorNotFound(id.to_string()))
    }

    /// Look up a color by id, then by name (first match)
    pub fn find_color(&self, selector: &str) -> Result<&Color, StoreError> {
        self.color(selector)
            .or_else(|| self.colors.iter().find(|c| c.matches(selector)))
            .ok_or_else(|| StoreError::ColorNotFound(selector.to_string()))
    }

    /// Append a color, returning its id
    pub fn add_color(&mut self, color: Color) -> String {
        let id = color.id.clone();
        self.colors.push(color);
        id
    }

    /// Remove a color by id
    ///
    /// Base and background references to it are cleared.
    pub fn remove_color(&mut self, id: &str) -> Result<Color, StoreError> {
        let index = self
            .colors
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::ColorNotFound(id.to_string()))?;

        if self.base_color_id.as_deref() == Some(id) {
            self.base_color_id = None;
        }
        if self.background_color_id.as_deref() == Some(id) {
            self.clear_background_shade();
        }
        Ok(self.colors.remove(index))
    }

    /// Append a copy of a color under a new id, returning that id
    pub fn duplicate_color(&mut self, id: &str) -> Result<String, StoreError> {
        let copy = self
            .color(id)
            .ok_or_else(|| StoreError::ColorNotFound(id.to_string()))?
            .duplicate();
        Ok(self.add_color(copy))
    }

    /// Replace a channel curve
    ///
    /// With `propagate` set and the channel linked on this color, every other
    /// color with the same channel linked receives a copy. The broadcast is
    /// one level deep.
    pub fn set_spline(
        &mut self,
        id: &str,
        channel: Channel,
        curve: Curve,
        propagate: bool,
    ) -> Result<(), StoreError> {
        let color = self.color_mut(id)?;
        color.set_curve(channel, curve);

        if propagate && color.is_linked(channel) {
            let mut siblings = 0;
            for other in self.colors.iter_mut() {
                if other.id != id && other.is_linked(channel) {
                    other.set_curve(channel, curve);
                    siblings += 1;
                }
            }
            tracing::debug!(color = %id, %channel, siblings, "Broadcast linked curve");
        }
        Ok(())
    }

    /// Replace one endpoint value of a channel curve
    pub fn set_endpoint(
        &mut self,
        id: &str,
        channel: Channel,
        which: Endpoint,
        value: f64,
    ) -> Result<(), StoreError> {
        let curve = self.color_mut(id)?.curve(channel).with_endpoint(which, value)?;
        self.set_spline(id, channel, curve, true)
    }

    /// Set the start or end of all three channels from one sRGB color
    ///
    /// The color is converted to OKLCH first and every channel is validated
    /// before anything changes. Gray input keeps the current hue; otherwise
    /// the hue is placed on whichever turn of the wheel lies nearest the
    /// current value.
    pub fn set_endpoint_color(
        &mut self,
        id: &str,
        which: Endpoint,
        srgb: Srgb,
    ) -> Result<(), StoreError> {
        let target = Oklch::from(srgb);
        let color = self.color_mut(id)?;

        let current_hue = color.curve(Channel::Hue).endpoint(which);
        let hue = if target.is_achromatic() {
            current_hue
        } else {
            nearest_hue_turn(target.h, current_hue)
        };

        let mut curves = Vec::with_capacity(3);
        for (channel, value) in [
            (Channel::Lightness, target.l),
            (Channel::Saturation, target.c),
            (Channel::Hue, hue),
        ] {
            curves.push((channel, color.curve(channel).with_endpoint(which, value)?));
        }

        for (channel, curve) in curves {
            self.set_spline(id, channel, curve, true)?;
        }
        Ok(())
    }

    /// Replace a channel's handles with an easing preset, keeping endpoints
    pub fn set_easing(
        &mut self,
        id: &str,
        channel: Channel,
        easing: Easing,
    ) -> Result<(), StoreError> {
        let curve = self.color_mut(id)?.curve(channel).with_easing(easing);
        self.set_spline(id, channel, curve, true)
    }

    /// Toggle a channel's link flag
    ///
    /// Joining adopts the curve of the first other color already linked on
    /// that channel. Leaving keeps the curve as it is.
    pub fn link_channel(
        &mut self,
        id: &str,
        channel: Channel,
        enable: bool,
    ) -> Result<(), StoreError> {
        let source = if enable {
            self.colors
                .iter()
                .find(|c| c.id != id && c.is_linked(channel))
                .map(|c| *c.curve(channel))
        } else {
            None
        };

        let color = self.color_mut(id)?;
        if let Some(curve) = source {
            color.set_curve(channel, curve);
        }
        color.set_linked(channel, enable);
        Ok(())
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    pub fn set_interpolation_count(&mut self, count: usize) -> Result<(), StoreError> {
        if !(MIN_SAMPLES..=MAX_SAMPLES).contains(&count) {
            return Err(StoreError::InterpolationCount(count));
        }
        self.interpolation_count = count;
        Ok(())
    }

    /// Mark one shade as the preview background
    pub fn set_background_shade(
        &mut self,
        color_id: &str,
        index: usize,
    ) -> Result<(), StoreError> {
        if self.color(color_id).is_none() {
            return Err(StoreError::ColorNotFound(color_id.to_string()));
        }
        if index >= self.interpolation_count {
            return Err(StoreError::ShadeIndex {
                index,
                count: self.interpolation_count,
            });
        }
        self.background_color_id = Some(color_id.to_string());
        self.background_shade_index = Some(index);
        Ok(())
    }

    /// Bring loaded data back within what the editors allow
    ///
    /// The shade count is clamped into range. Background and base color
    /// references that no longer resolve are cleared.
    pub fn repair(&mut self) {
        let count = self.interpolation_count.clamp(MIN_SAMPLES, MAX_SAMPLES);
        if count != self.interpolation_count {
            tracing::warn!(
                theme = %self.id,
                found = self.interpolation_count,
                count,
                "Interpolation count out of range, clamped"
            );
            self.interpolation_count = count;
        }

        let background_ok = match (&self.background_color_id, self.background_shade_index) {
            (None, None) => true,
            (Some(id), Some(index)) => self.color(id).is_some() && index < count,
            _ => false,
        };
        if !background_ok {
            tracing::warn!(theme = %self.id, "Dropping unresolvable background shade");
            self.clear_background_shade();
        }

        if self.base_color_id.is_some() && self.base_color().is_none() {
            tracing::warn!(theme = %self.id, "Dropping unresolvable base color");
            self.base_color_id = None;
        }
    }

    pub fn clear_background_shade(&mut self) {
        self.background_color_id = None;
        self.background_shade_index = None;
    }

    /// The background shade, if set and still resolvable
    pub fn background_shade(&self) -> Option<Shade> {
        let color = self.color(self.background_color_id.as_deref()?)?;
        let index = self.background_shade_index?;
        color
            .shades(self.interpolation_count)
            .ok()?
            .get(index)
            .copied()
    }

    pub fn set_base_color(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if self.color(id).is_none() {
                return Err(StoreError::ColorNotFound(id.to_string()));
            }
        }
        self.base_color_id = id.map(str::to_string);
        Ok(())
    }

    pub fn base_color(&self) -> Option<&Color> {
        self.color(self.base_color_id.as_deref()?)
    }

    /// Shades of one color at the theme's shade count
    pub fn shades(&self, color_id: &str) -> Result<Vec<Shade>, StoreError> {
        let color = self
            .color(color_id)
            .ok_or_else(|| StoreError::ColorNotFound(color_id.to_string()))?;
        Ok(color.shades(self.interpolation_count)?)
    }

    /// Shades of every color, in theme order
    pub fn interpolations(&self) -> Result<Vec<(&Color, Vec<Shade>)>, StoreError> {
        self.colors
            .iter()
            .map(|color| Ok((color, color.shades(self.interpolation_count)?)))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            id: new_id(),
            name: default_name(),
            favorite: false,
            colors: default_colors(),
            base_color_id: None,
            interpolation_count: DEFAULT_INTERPOLATION_COUNT,
            background_color_id: None,
            background_shade_index: None,
        }
    }
}

/// `hue` or `hue + 360`, whichever is nearer `current`, within the hue bounds
fn nearest_hue_turn(hue: f64, current: f64) -> f64 {
    let max = Channel::Hue.bounds().max;
    let wrapped = hue + 360.0;
    if wrapped <= max && (wrapped - current).abs() < (hue - current).abs() {
        wrapped
    } else {
        hue
    }
}
