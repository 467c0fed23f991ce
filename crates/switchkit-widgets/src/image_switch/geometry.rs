//! Frame computation for every layer of the switch.
//!
//! All functions are pure: bounds are in local coordinates (origin at 0,0)
//! and the result depends only on bounds, style and control state.

use super::state::ControlState;
use super::style::{Shape, Side, SwitchStyle};
use switchkit_core::{Point, Rect, Size};

/// Thumb width multiplier while stretched.
pub const STRETCH_FACTOR: f32 = 1.2;
/// Track corner radius of a square switch, relative to bounds height.
pub const SQUARE_TRACK_RADIUS_RATIO: f32 = 0.12;
/// Inner mask corner radius of a square switch.
pub const SQUARE_INNER_RADIUS: f32 = 5.0;
/// Label font size below [`LARGE_FONT_THRESHOLD`].
pub const SMALL_FONT_SIZE: f32 = 12.0;
/// Bounds height from which the label font scales.
pub const LARGE_FONT_THRESHOLD: f32 = 50.0;
/// Label font size relative to bounds height for tall switches.
pub const FONT_SIZE_RATIO: f32 = 0.2;

/// A rectangle with a uniform corner radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// Position and size
    pub rect: Rect,
    /// Corner radius
    pub radius: f32,
}

impl Frame {
    /// Create a frame.
    #[must_use]
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }
}

/// Track frame: bounds inset by the track padding.
#[must_use]
pub fn track_frame(bounds: Rect, style: &SwitchStyle) -> Frame {
    let rect = bounds.inset(style.track_top_bottom_padding);
    let radius = match style.shape {
        Shape::Rounded => rect.height / 2.0,
        Shape::Square => bounds.height * SQUARE_TRACK_RADIUS_RATIO,
    };
    Frame::new(rect, radius)
}

/// Gradient frame, in the track's own coordinates.
#[must_use]
pub const fn gradient_frame(track: Frame) -> Frame {
    Frame::new(track.rect.local(), track.radius)
}

/// Distance from the bounds edge to the thumb.
#[must_use]
pub fn thumb_inset(style: &SwitchStyle) -> f32 {
    style.border_width + style.thumb_radius_padding
}

/// Thumb size; widened while stretched.
#[must_use]
pub fn thumb_size(bounds: Rect, style: &SwitchStyle, state: ControlState) -> Size {
    let height = 2.0f32
        .mul_add(-thumb_inset(style), bounds.height)
        .max(0.0);
    let width = if state.is_stretched(style.stretch_enabled) {
        height * STRETCH_FACTOR
    } else {
        height
    };
    Size::new(width, height)
}

/// Thumb origin for a thumb of the given width.
#[must_use]
pub fn thumb_origin(bounds: Rect, style: &SwitchStyle, state: ControlState, width: f32) -> Point {
    let inset = thumb_inset(style);
    let x = if state.is_on {
        bounds.width - width - inset
    } else {
        inset
    };
    Point::new(x, inset)
}

/// Thumb frame and corner radius.
#[must_use]
pub fn thumb_frame(bounds: Rect, style: &SwitchStyle, state: ControlState) -> Frame {
    let size = thumb_size(bounds, style, state);
    let origin = thumb_origin(bounds, style, state, size.width);
    let radius = match style.shape {
        Shape::Rounded => size.height / 2.0,
        Shape::Square => style.thumb_corner_radius,
    };
    Frame::new(Rect::from_origin_size(origin, size), radius)
}

/// Inner mask frame.
///
/// Collapses to a zero-size rect at the track center while on or stretched.
#[must_use]
pub fn inner_frame(bounds: Rect, style: &SwitchStyle, state: ControlState) -> Frame {
    let inset = style.border_width + style.track_top_bottom_padding;
    let hidden = state.is_inner_hidden(style.stretch_enabled);

    let rect = if hidden {
        let center = track_frame(bounds, style).rect.center();
        Rect::from_origin_size(center, Size::ZERO)
    } else {
        bounds.inset(inset)
    };
    let radius = match style.shape {
        Shape::Rounded if hidden => 0.0,
        Shape::Rounded => (bounds.height / 2.0 - inset).max(0.0),
        Shape::Square => SQUARE_INNER_RADIUS,
    };
    Frame::new(rect, radius)
}

/// Square size of an image content node.
#[must_use]
pub fn image_content_size(bounds: Rect, style: &SwitchStyle, state: ControlState) -> Size {
    let inset = 2.0 * (style.border_width + style.track_top_bottom_padding);
    let thumb = thumb_size(bounds, style, state);
    Size::square((bounds.height - inset - thumb.height / 2.0).max(0.0))
}

/// Label font size for the given bounds.
#[must_use]
pub fn content_font_size(bounds: Rect) -> f32 {
    if bounds.height < LARGE_FONT_THRESHOLD {
        SMALL_FONT_SIZE
    } else {
        bounds.height * FONT_SIZE_RATIO
    }
}

/// Offset that centers content of `size` in the space beside the thumb.
#[must_use]
pub fn content_leading(bounds: Rect, style: &SwitchStyle, state: ControlState, size: Size) -> f32 {
    let thumb = thumb_size(bounds, style, state);
    let free = bounds.max_x()
        - (style.content_leading_trailing_padding + style.border_width + thumb.width);
    free / 2.0 - size.width / 2.0
}

/// Frame of a content node of `size` on the given side.
///
/// The visible side sits beside the thumb; the other side is pushed outside
/// the bounds, where the contents clip hides it.
#[must_use]
pub fn content_frame(
    side: Side,
    bounds: Rect,
    style: &SwitchStyle,
    state: ControlState,
    size: Size,
) -> Rect {
    let leading = content_leading(bounds, style, state, size);
    let x = match side {
        Side::On if state.is_on => leading,
        Side::On => -bounds.width / 2.0,
        Side::Off if state.is_on => bounds.width,
        Side::Off => bounds.width - size.width - leading,
    };
    let y = bounds.mid_y() - size.height / 2.0;
    Rect::from_origin_size(Point::new(x, y), size)
}

/// Frames of the fixed layers for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    /// Track
    pub track: Frame,
    /// Gradient, relative to the track
    pub gradient: Frame,
    /// Inner mask
    pub inner: Frame,
    /// Thumb
    pub thumb: Frame,
    /// Clipping container for content nodes
    pub contents: Rect,
    /// Label font size
    pub font_size: f32,
    /// Size of image content nodes
    pub image_size: Size,
}

impl SwitchGeometry {
    /// Compute every fixed frame.
    #[must_use]
    pub fn compute(bounds: Rect, style: &SwitchStyle, state: ControlState) -> Self {
        let track = track_frame(bounds, style);
        Self {
            track,
            gradient: gradient_frame(track),
            inner: inner_frame(bounds, style, state),
            thumb: thumb_frame(bounds, style, state),
            contents: bounds,
            font_size: content_font_size(bounds),
            image_size: image_content_size(bounds, style, state),
        }
    }
}
