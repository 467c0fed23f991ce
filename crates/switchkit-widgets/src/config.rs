//! Declarative switch style loaded from YAML or JSON.
//!
//! Colors are hex strings (`#rrggbb` or `#rrggbbaa`), images are host keys.
//! Omitted fields keep their [`SwitchStyle::default`] values.
//!
//! ```yaml
//! shape: square
//! border_width: 1
//! on_tint_colors: ["#34c759", "#30b0c7"]
//! on_text: "ON"
//! off_image: moon
//! ```

use crate::error::ConfigError;
use crate::image_switch::{Shape, Side, SwitchStyle};
use serde::{Deserialize, Serialize};
use switchkit_core::{Color, ImageRef};

/// Serializable description of a [`SwitchStyle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchConfig {
    /// Track and thumb outline
    pub shape: Option<Shape>,
    /// Thumb corner radius for square switches
    pub thumb_corner_radius: Option<f32>,
    /// Widen the thumb while pressed
    pub stretch_enabled: Option<bool>,
    /// Track border width
    pub border_width: Option<f32>,
    /// Border color override
    pub border_color: Option<String>,
    /// Border color while on
    pub on_border_color: Option<String>,
    /// Border color while off
    pub off_border_color: Option<String>,
    /// Text color override
    pub text_color: Option<String>,
    /// On label color
    pub on_text_color: Option<String>,
    /// Off label color
    pub off_text_color: Option<String>,
    /// Track inset
    pub track_top_bottom_padding: Option<f32>,
    /// Content centering padding
    pub content_leading_trailing_padding: Option<f32>,
    /// Gap around the thumb
    pub thumb_radius_padding: Option<f32>,
    /// Track fill while on
    pub on_tint_color: Option<String>,
    /// Track fill while off
    pub off_tint_color: Option<String>,
    /// Gradient stops while on
    pub on_tint_colors: Option<Vec<String>>,
    /// Thumb fill override
    pub thumb_tint_color: Option<String>,
    /// Thumb fill while on
    pub on_thumb_tint_color: Option<String>,
    /// Thumb fill while off
    pub off_thumb_tint_color: Option<String>,
    /// On label
    pub on_text: Option<String>,
    /// Off label
    pub off_text: Option<String>,
    /// On image key
    pub on_image: Option<String>,
    /// Off image key
    pub off_image: Option<String>,
    /// Thumb image key while on
    pub on_thumb_image: Option<String>,
    /// Thumb image key while off
    pub off_thumb_image: Option<String>,
    /// Thumb image key for both states
    pub thumb_image: Option<String>,
    /// Inner mask fill
    pub inner_color: Option<String>,
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_hex(value).map_err(|source| ConfigError::InvalidColor {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })
}

fn set_color(target: &mut Color, field: &str, value: Option<&str>) -> Result<(), ConfigError> {
    if let Some(value) = value {
        *target = parse_color(field, value)?;
    }
    Ok(())
}

fn optional_color(field: &str, value: Option<&str>) -> Result<Option<Color>, ConfigError> {
    value.map(|v| parse_color(field, v)).transpose()
}

fn image(key: Option<String>) -> Option<ImageRef> {
    key.map(ImageRef::new)
}

impl SwitchConfig {
    /// Parse from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Resolve into a style, starting from the defaults.
    pub fn into_style(self) -> Result<SwitchStyle, ConfigError> {
        if self.on_text.is_some() && self.on_image.is_some() {
            return Err(ConfigError::ConflictingContent { side: Side::On });
        }
        if self.off_text.is_some() && self.off_image.is_some() {
            return Err(ConfigError::ConflictingContent { side: Side::Off });
        }

        let mut style = SwitchStyle::default();
        if let Some(shape) = self.shape {
            style.shape = shape;
        }
        if let Some(radius) = self.thumb_corner_radius {
            style.thumb_corner_radius = radius;
        }
        if let Some(stretch) = self.stretch_enabled {
            style.stretch_enabled = stretch;
        }
        if let Some(width) = self.border_width {
            style.border_width = width;
        }
        if let Some(padding) = self.track_top_bottom_padding {
            style.track_top_bottom_padding = padding;
        }
        if let Some(padding) = self.content_leading_trailing_padding {
            style.content_leading_trailing_padding = padding;
        }
        if let Some(padding) = self.thumb_radius_padding {
            style.thumb_radius_padding = padding;
        }

        style.border_color = optional_color("border_color", self.border_color.as_deref())?;
        style.text_color = optional_color("text_color", self.text_color.as_deref())?;
        style.thumb_tint_color =
            optional_color("thumb_tint_color", self.thumb_tint_color.as_deref())?;
        set_color(
            &mut style.on_border_color,
            "on_border_color",
            self.on_border_color.as_deref(),
        )?;
        set_color(
            &mut style.off_border_color,
            "off_border_color",
            self.off_border_color.as_deref(),
        )?;
        set_color(
            &mut style.on_text_color,
            "on_text_color",
            self.on_text_color.as_deref(),
        )?;
        set_color(
            &mut style.off_text_color,
            "off_text_color",
            self.off_text_color.as_deref(),
        )?;
        set_color(
            &mut style.on_tint_color,
            "on_tint_color",
            self.on_tint_color.as_deref(),
        )?;
        set_color(
            &mut style.off_tint_color,
            "off_tint_color",
            self.off_tint_color.as_deref(),
        )?;
        set_color(
            &mut style.on_thumb_tint_color,
            "on_thumb_tint_color",
            self.on_thumb_tint_color.as_deref(),
        )?;
        set_color(
            &mut style.off_thumb_tint_color,
            "off_thumb_tint_color",
            self.off_thumb_tint_color.as_deref(),
        )?;
        set_color(
            &mut style.inner_color,
            "inner_color",
            self.inner_color.as_deref(),
        )?;
        if let Some(stops) = &self.on_tint_colors {
            style.on_tint_colors = stops
                .iter()
                .map(|stop| parse_color("on_tint_colors", stop))
                .collect::<Result<_, _>>()?;
        }

        style.on_text = self.on_text;
        style.off_text = self.off_text;
        style.on_image = image(self.on_image);
        style.off_image = image(self.off_image);
        style.on_thumb_image = image(self.on_thumb_image);
        style.off_thumb_image = image(self.off_thumb_image);
        style.thumb_image = image(self.thumb_image);
        style.apply_thumb_image();
        Ok(style)
    }
}
