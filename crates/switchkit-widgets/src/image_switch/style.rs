//! Style state for [`ImageSwitch`](super::ImageSwitch).
//!
//! Plain data. Every color with an optional override is resolved through
//! [`resolve`]: the override wins when present, otherwise the on/off pair is
//! picked by the current value.

use serde::{Deserialize, Serialize};
use std::fmt;
use switchkit_core::{Color, ImageRef, Shadow};

/// Outline of the track and thumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Slightly rounded rectangle; the thumb uses `thumb_corner_radius`
    Square,
    /// Fully rounded capsule
    #[default]
    Rounded,
}

/// One of the two content sides of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Content shown while the switch is on
    On,
    /// Content shown while the switch is off
    Off,
}

impl Side {
    /// Whether this side is the "on" side.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// What a content side displays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// Nothing
    #[default]
    None,
    /// A text label
    Text(String),
    /// A host image
    Image(ImageRef),
}

impl Content {
    /// Content for an optional label.
    #[must_use]
    pub fn from_text(text: Option<&str>) -> Self {
        text.map_or(Self::None, |t| Self::Text(t.to_string()))
    }

    /// Content for an optional image.
    #[must_use]
    pub fn from_image(image: Option<&ImageRef>) -> Self {
        image.map_or(Self::None, |i| Self::Image(i.clone()))
    }
}

/// Pick the override when present, otherwise the on/off pair by value.
#[must_use]
pub const fn resolve(override_color: Option<Color>, on: Color, off: Color, is_on: bool) -> Color {
    match override_color {
        Some(color) => color,
        None if is_on => on,
        None => off,
    }
}

/// Every configurable visual property of the switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchStyle {
    /// Track and thumb outline
    pub shape: Shape,
    /// Thumb corner radius for [`Shape::Square`]
    pub thumb_corner_radius: f32,
    /// Widen the thumb while pressed
    pub stretch_enabled: bool,
    /// Track border width
    pub border_width: f32,
    /// Border color override
    pub border_color: Option<Color>,
    /// Border color while on
    pub on_border_color: Color,
    /// Border color while off
    pub off_border_color: Color,
    /// Text color override
    pub text_color: Option<Color>,
    /// Color of the on label
    pub on_text_color: Color,
    /// Color of the off label
    pub off_text_color: Color,
    /// Inset of the track from the bounds on every side
    pub track_top_bottom_padding: f32,
    /// Extra space subtracted when centering content beside the thumb
    pub content_leading_trailing_padding: f32,
    /// Gap between the thumb and the border
    pub thumb_radius_padding: f32,
    /// Track fill while on
    pub on_tint_color: Color,
    /// Track fill while off
    pub off_tint_color: Color,
    /// Two-stop gradient used instead of `on_tint_color` while on
    pub on_tint_colors: Vec<Color>,
    /// Thumb fill override
    pub thumb_tint_color: Option<Color>,
    /// Thumb fill while on
    pub on_thumb_tint_color: Color,
    /// Thumb fill while off
    pub off_thumb_tint_color: Color,
    /// Label shown while on
    pub on_text: Option<String>,
    /// Label shown while off
    pub off_text: Option<String>,
    /// Image shown while on
    pub on_image: Option<ImageRef>,
    /// Image shown while off
    pub off_image: Option<ImageRef>,
    /// Thumb artwork while on
    pub on_thumb_image: Option<ImageRef>,
    /// Thumb artwork while off
    pub off_thumb_image: Option<ImageRef>,
    /// Thumb artwork for both states, copied into the pair when set
    pub thumb_image: Option<ImageRef>,
    /// Fill of the inner mask shown over the track while off
    pub inner_color: Color,
    /// Drop shadow under the thumb
    pub thumb_shadow: Shadow,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            shape: Shape::Rounded,
            thumb_corner_radius: 0.0,
            stretch_enabled: true,
            border_width: 0.0,
            border_color: None,
            on_border_color: Color::WHITE,
            off_border_color: Color::WHITE,
            text_color: None,
            on_text_color: Color::WHITE,
            off_text_color: Color::WHITE,
            track_top_bottom_padding: 0.0,
            content_leading_trailing_padding: 0.0,
            thumb_radius_padding: 3.5,
            on_tint_color: Color::GREEN,
            off_tint_color: Color::WHITE,
            on_tint_colors: Vec::new(),
            thumb_tint_color: None,
            on_thumb_tint_color: Color::WHITE,
            off_thumb_tint_color: Color::WHITE,
            on_text: None,
            off_text: None,
            on_image: None,
            off_image: None,
            on_thumb_image: None,
            off_thumb_image: None,
            thumb_image: None,
            inner_color: Color::WHITE,
            thumb_shadow: Shadow {
                color: Color::BLACK.with_alpha(0.25),
                opacity: 1.0,
                offset_x: 0.0,
                offset_y: 8.0,
                blur: 6.0,
            },
        }
    }
}

impl SwitchStyle {
    /// Border color for the given value.
    #[must_use]
    pub const fn border_color_for(&self, is_on: bool) -> Color {
        resolve(
            self.border_color,
            self.on_border_color,
            self.off_border_color,
            is_on,
        )
    }

    /// Thumb fill for the given value.
    #[must_use]
    pub const fn thumb_tint_for(&self, is_on: bool) -> Color {
        resolve(
            self.thumb_tint_color,
            self.on_thumb_tint_color,
            self.off_thumb_tint_color,
            is_on,
        )
    }

    /// Label color for a content side.
    #[must_use]
    pub const fn text_color_for(&self, side: Side) -> Color {
        resolve(
            self.text_color,
            self.on_text_color,
            self.off_text_color,
            side.is_on(),
        )
    }

    /// Solid track fill for the given value.
    #[must_use]
    pub const fn tint_for(&self, is_on: bool) -> Color {
        if is_on {
            self.on_tint_color
        } else {
            self.off_tint_color
        }
    }

    /// Gradient stops to show, if any.
    ///
    /// Only while on, and only when at least two stops are configured; extra
    /// stops are ignored.
    #[must_use]
    pub fn gradient_for(&self, is_on: bool) -> Option<[Color; 2]> {
        match self.on_tint_colors.as_slice() {
            [first, second, ..] if is_on => Some([*first, *second]),
            _ => None,
        }
    }

    /// Thumb artwork for the given value.
    #[must_use]
    pub const fn thumb_image_for(&self, is_on: bool) -> Option<&ImageRef> {
        if is_on {
            self.on_thumb_image.as_ref()
        } else {
            self.off_thumb_image.as_ref()
        }
    }

    /// Copy `thumb_image` into both on/off slots, if set.
    pub fn apply_thumb_image(&mut self) {
        if let Some(image) = &self.thumb_image {
            self.on_thumb_image = Some(image.clone());
            self.off_thumb_image = Some(image.clone());
        }
    }

    /// Declared content for a side. An image takes precedence over text.
    #[must_use]
    pub fn content_for(&self, side: Side) -> Content {
        let (text, image) = match side {
            Side::On => (self.on_text.as_deref(), self.on_image.as_ref()),
            Side::Off => (self.off_text.as_deref(), self.off_image.as_ref()),
        };
        match image {
            Some(image) => Content::Image(image.clone()),
            None => Content::from_text(text),
        }
    }
}
