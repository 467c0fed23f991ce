//! Retained layer tree of the switch.
//!
//! Z-order, bottom to top: track (with its optional gradient), inner mask,
//! contents container (on/off content nodes, clipped), thumb.
//!
//! Every change records whether it should animate. Changes made inside a
//! transaction take the transaction's setting; changes made outside any
//! transaction animate.

use super::geometry::{content_frame, gradient_frame, Frame, SwitchGeometry};
use super::state::ControlState;
use super::style::{Content, Side, SwitchStyle};
use switchkit_core::{
    BoxStyle, Canvas, Color, ContentsGravity, CornerRadius, FontWeight, ImageRef, LinearGradient,
    Point, Rect, Shadow, StrokeStyle, TextAlign, TextMeasurer, TextStyle,
};
use tracing::trace;

/// Identity of a layer. Replacing a node gives it a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Visual properties of one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: LayerId,
    /// Frame in the parent's coordinates
    pub frame: Rect,
    /// Uniform corner radius
    pub corner_radius: f32,
    /// Fill
    pub background: Option<Color>,
    /// Border drawn inside the frame
    pub border: Option<StrokeStyle>,
    /// Image drawn into the frame
    pub contents: Option<ImageRef>,
    /// Placement of `contents`
    pub gravity: ContentsGravity,
    /// Drop shadow
    pub shadow: Option<Shadow>,
    /// Clip sublayers to the frame
    pub masks_to_bounds: bool,
    animated: bool,
}

impl Layer {
    fn new(id: LayerId) -> Self {
        Self {
            id,
            frame: Rect::default(),
            corner_radius: 0.0,
            background: None,
            border: None,
            contents: None,
            gravity: ContentsGravity::default(),
            shadow: None,
            masks_to_bounds: false,
            animated: false,
        }
    }

    /// Layer identity.
    #[must_use]
    pub const fn id(&self) -> LayerId {
        self.id
    }

    /// Whether the most recent change to this layer animates.
    #[must_use]
    pub const fn last_change_animated(&self) -> bool {
        self.animated
    }
}

/// Gradient drawn over the track fill.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLayer {
    /// Frame, relative to the track
    pub layer: Layer,
    /// Gradient parameters
    pub gradient: LinearGradient,
}

impl GradientLayer {
    fn new(id: LayerId, colors: [Color; 2]) -> Self {
        Self {
            layer: Layer::new(id),
            gradient: LinearGradient {
                colors,
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.75),
                locations: [0.0, 1.0],
            },
        }
    }
}

/// Label carried by a text content node.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The label
    pub string: String,
    /// Font size, set on layout
    pub font_size: f32,
    /// Text color
    pub color: Color,
}

/// What a content node renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentKind {
    /// A bold, centered label
    Text(TextContent),
    /// The layer's `contents` image
    Image,
}

/// A content node on one side of the switch.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayer {
    /// Frame relative to the contents container
    pub layer: Layer,
    /// Payload
    pub kind: ContentKind,
}

impl ContentLayer {
    /// The label, for text nodes.
    #[must_use]
    pub fn text(&self) -> Option<&TextContent> {
        match &self.kind {
            ContentKind::Text(text) => Some(text),
            ContentKind::Image => None,
        }
    }

    /// The image, for image nodes.
    #[must_use]
    pub const fn image(&self) -> Option<&ImageRef> {
        match self.kind {
            ContentKind::Image => self.layer.contents.as_ref(),
            ContentKind::Text(_) => None,
        }
    }

    const fn is_text(&self) -> bool {
        matches!(self.kind, ContentKind::Text(_))
    }
}

/// Position of a layer in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Track background and border
    Track,
    /// Gradient inside the track
    Gradient,
    /// Inner mask
    Inner,
    /// Clipping container for content nodes
    Contents,
    /// On-side content node
    OnContent,
    /// Off-side content node
    OffContent,
    /// Thumb
    Thumb,
}

trait Tracked: Clone + PartialEq {
    fn mark_animated(&mut self, animated: bool);
}

impl Tracked for Layer {
    fn mark_animated(&mut self, animated: bool) {
        self.animated = animated;
    }
}

impl Tracked for GradientLayer {
    fn mark_animated(&mut self, animated: bool) {
        self.layer.animated = animated;
    }
}

impl Tracked for ContentLayer {
    fn mark_animated(&mut self, animated: bool) {
        self.layer.animated = animated;
    }
}

/// Apply `f` and stamp the animation flag if anything changed.
fn update<T: Tracked>(target: &mut T, animated: bool, f: impl FnOnce(&mut T)) {
    let before = target.clone();
    f(target);
    if *target != before {
        target.mark_animated(animated);
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Transaction {
    depth: u32,
    animated: bool,
}

/// The switch's retained layers.
#[derive(Debug, Clone)]
pub struct LayerTree {
    next_id: u64,
    track: Layer,
    gradient: Option<GradientLayer>,
    inner: Layer,
    contents: Layer,
    on_content: Option<ContentLayer>,
    off_content: Option<ContentLayer>,
    thumb: Layer,
    transaction: Transaction,
}

impl LayerTree {
    /// Build the fixed layers and apply the initial appearance.
    #[must_use]
    pub fn new(style: &SwitchStyle, state: ControlState) -> Self {
        let mut contents = Layer::new(LayerId(3));
        contents.masks_to_bounds = true;
        let mut tree = Self {
            next_id: 5,
            track: Layer::new(LayerId(1)),
            gradient: None,
            inner: Layer::new(LayerId(2)),
            contents,
            on_content: None,
            off_content: None,
            thumb: Layer::new(LayerId(4)),
            transaction: Transaction::default(),
        };
        tree.begin_transaction(false);
        tree.rebuild_appearance(style, state);
        tree.commit_transaction();
        tree
    }

    fn allocate(next_id: &mut u64) -> LayerId {
        let id = LayerId(*next_id);
        *next_id += 1;
        id
    }

    /// Open a transaction. Nested transactions inherit the outermost setting.
    pub fn begin_transaction(&mut self, animated: bool) {
        if self.transaction.depth == 0 {
            self.transaction.animated = animated;
        }
        self.transaction.depth += 1;
    }

    /// Close the innermost open transaction.
    pub fn commit_transaction(&mut self) {
        self.transaction.depth = self.transaction.depth.saturating_sub(1);
    }

    /// Whether a transaction is open.
    #[must_use]
    pub const fn in_transaction(&self) -> bool {
        self.transaction.depth > 0
    }

    const fn animation_flag(&self) -> bool {
        self.transaction.depth == 0 || self.transaction.animated
    }

    /// Apply colors, border, gradient presence and thumb artwork for `state`.
    pub fn rebuild_appearance(&mut self, style: &SwitchStyle, state: ControlState) {
        let animated = self.animation_flag();
        let is_on = state.is_on;

        match style.gradient_for(is_on) {
            Some(colors) => {
                let frame = gradient_frame(Frame::new(self.track.frame, self.track.corner_radius));
                match &mut self.gradient {
                    Some(gradient) => update(gradient, animated, |g| g.gradient.colors = colors),
                    None => {
                        let id = Self::allocate(&mut self.next_id);
                        let mut gradient = GradientLayer::new(id, colors);
                        gradient.layer.frame = frame.rect;
                        gradient.layer.corner_radius = frame.radius;
                        gradient.layer.animated = animated;
                        trace!(id = id.get(), "gradient layer inserted");
                        self.gradient = Some(gradient);
                    }
                }
            }
            None => {
                if let Some(gradient) = self.gradient.take() {
                    trace!(id = gradient.layer.id.get(), "gradient layer removed");
                }
            }
        }

        let border = (style.border_width > 0.0).then(|| StrokeStyle {
            color: style.border_color_for(is_on),
            width: style.border_width,
        });
        update(&mut self.track, animated, |track| {
            track.background = Some(style.tint_for(is_on));
            track.border = border;
        });
        update(&mut self.inner, animated, |inner| {
            inner.background = Some(style.inner_color);
        });
        update(&mut self.thumb, animated, |thumb| {
            thumb.background = Some(style.thumb_tint_for(is_on));
            thumb.shadow = Some(style.thumb_shadow);
            thumb.gravity = ContentsGravity::ResizeAspect;
            thumb.contents = style.thumb_image_for(is_on).cloned();
        });

        for side in [Side::On, Side::Off] {
            let color = style.text_color_for(side);
            if let Some(node) = self.content_slot(side).as_mut() {
                update(node, animated, |node| {
                    if let ContentKind::Text(text) = &mut node.kind {
                        text.color = color;
                    }
                });
            }
        }
    }

    /// Recompute every frame for `bounds` (local coordinates).
    pub fn relayout(
        &mut self,
        bounds: Rect,
        style: &SwitchStyle,
        state: ControlState,
        measurer: &dyn TextMeasurer,
    ) {
        let animated = self.animation_flag();
        let geometry = SwitchGeometry::compute(bounds, style, state);

        update(&mut self.track, animated, |track| {
            track.frame = geometry.track.rect;
            track.corner_radius = geometry.track.radius;
        });
        if let Some(gradient) = &mut self.gradient {
            update(gradient, animated, |g| {
                g.layer.frame = geometry.gradient.rect;
                g.layer.corner_radius = geometry.gradient.radius;
            });
        }
        update(&mut self.inner, animated, |inner| {
            inner.frame = geometry.inner.rect;
            inner.corner_radius = geometry.inner.radius;
        });
        update(&mut self.thumb, animated, |thumb| {
            thumb.frame = geometry.thumb.rect;
            thumb.corner_radius = geometry.thumb.radius;
            thumb.contents = style.thumb_image_for(state.is_on).cloned();
        });
        update(&mut self.contents, animated, |contents| {
            contents.frame = geometry.contents;
        });

        for side in [Side::On, Side::Off] {
            if let Some(node) = self.content_slot(side).as_mut() {
                update(node, animated, |node| {
                    let size = match &mut node.kind {
                        ContentKind::Text(text) => {
                            text.font_size = geometry.font_size;
                            measurer.measure(&text.string, geometry.font_size)
                        }
                        ContentKind::Image => geometry.image_size,
                    };
                    node.layer.frame = content_frame(side, bounds, style, state, size);
                });
            }
        }

        trace!(
            is_on = state.is_on,
            is_pressed = state.is_pressed,
            thumb_x = geometry.thumb.rect.x,
            "layers laid out"
        );
    }

    /// Make the node on `side` match `content`.
    ///
    /// A node of the same kind is updated in place and keeps its id. A
    /// different kind replaces the node. [`Content::None`] removes it.
    /// Frames are left for the next [`relayout`](Self::relayout).
    pub fn reconcile_content(&mut self, side: Side, content: &Content, style: &SwitchStyle) {
        let animated = self.animation_flag();
        let color = style.text_color_for(side);
        let slot = match side {
            Side::On => &mut self.on_content,
            Side::Off => &mut self.off_content,
        };
        let current_is_text = slot.as_ref().map(ContentLayer::is_text);

        match content {
            Content::None => {
                if let Some(node) = slot.take() {
                    trace!(%side, id = node.layer.id.get(), "content node removed");
                }
            }
            Content::Text(string) if current_is_text == Some(true) => {
                if let Some(node) = slot.as_mut() {
                    update(node, animated, |node| {
                        if let ContentKind::Text(text) = &mut node.kind {
                            text.string.clone_from(string);
                            text.color = color;
                        }
                    });
                }
            }
            Content::Image(image) if current_is_text == Some(false) => {
                if let Some(node) = slot.as_mut() {
                    update(node, animated, |node| {
                        node.layer.contents = Some(image.clone());
                    });
                }
            }
            Content::Text(string) => {
                let mut layer = Layer::new(Self::allocate(&mut self.next_id));
                layer.animated = animated;
                trace!(%side, id = layer.id.get(), "text content node created");
                *slot = Some(ContentLayer {
                    layer,
                    kind: ContentKind::Text(TextContent {
                        string: string.clone(),
                        font_size: 0.0,
                        color,
                    }),
                });
            }
            Content::Image(image) => {
                let mut layer = Layer::new(Self::allocate(&mut self.next_id));
                layer.animated = animated;
                layer.contents = Some(image.clone());
                layer.gravity = match side {
                    Side::On => ContentsGravity::Center,
                    Side::Off => ContentsGravity::ResizeAspect,
                };
                trace!(%side, id = layer.id.get(), "image content node created");
                *slot = Some(ContentLayer {
                    layer,
                    kind: ContentKind::Image,
                });
            }
        }
    }

    fn content_slot(&mut self, side: Side) -> &mut Option<ContentLayer> {
        match side {
            Side::On => &mut self.on_content,
            Side::Off => &mut self.off_content,
        }
    }

    /// Track layer.
    #[must_use]
    pub const fn track(&self) -> &Layer {
        &self.track
    }

    /// Gradient layer, present only while shown.
    #[must_use]
    pub const fn gradient(&self) -> Option<&GradientLayer> {
        self.gradient.as_ref()
    }

    /// Inner mask layer.
    #[must_use]
    pub const fn inner(&self) -> &Layer {
        &self.inner
    }

    /// Contents container.
    #[must_use]
    pub const fn contents(&self) -> &Layer {
        &self.contents
    }

    /// Content node on `side`, if any.
    #[must_use]
    pub const fn content(&self, side: Side) -> Option<&ContentLayer> {
        match side {
            Side::On => self.on_content.as_ref(),
            Side::Off => self.off_content.as_ref(),
        }
    }

    /// Thumb layer.
    #[must_use]
    pub const fn thumb(&self) -> &Layer {
        &self.thumb
    }

    /// Every present layer, bottom to top.
    #[must_use]
    pub fn layers(&self) -> Vec<(LayerRole, &Layer)> {
        let mut layers = vec![(LayerRole::Track, &self.track)];
        if let Some(gradient) = &self.gradient {
            layers.push((LayerRole::Gradient, &gradient.layer));
        }
        layers.push((LayerRole::Inner, &self.inner));
        layers.push((LayerRole::Contents, &self.contents));
        if let Some(node) = &self.on_content {
            layers.push((LayerRole::OnContent, &node.layer));
        }
        if let Some(node) = &self.off_content {
            layers.push((LayerRole::OffContent, &node.layer));
        }
        layers.push((LayerRole::Thumb, &self.thumb));
        layers
    }

    /// Emit draw commands, with frames offset by `origin`.
    pub fn paint(&self, canvas: &mut dyn Canvas, origin: Point) {
        let track_rect = self.track.frame.offset(origin);
        if let Some(fill) = self.track.background {
            canvas.fill_rounded_rect(track_rect, self.track.corner_radius, fill);
        }
        if let Some(gradient) = &self.gradient {
            canvas.fill_gradient(
                gradient.layer.frame.offset(track_rect.origin()),
                CornerRadius::uniform(gradient.layer.corner_radius),
                &gradient.gradient,
            );
        }
        if let Some(border) = self.track.border {
            canvas.stroke_rounded_rect(
                track_rect,
                self.track.corner_radius,
                border.color,
                border.width,
            );
        }

        if let Some(fill) = self.inner.background {
            if !self.inner.frame.size().is_empty() {
                canvas.fill_rounded_rect(
                    self.inner.frame.offset(origin),
                    self.inner.corner_radius,
                    fill,
                );
            }
        }

        let contents_rect = self.contents.frame.offset(origin);
        canvas.push_clip(contents_rect);
        for node in [&self.on_content, &self.off_content].into_iter().flatten() {
            Self::paint_content(canvas, node, contents_rect.origin());
        }
        canvas.pop_clip();

        let thumb_rect = self.thumb.frame.offset(origin);
        let mut thumb_style = BoxStyle {
            fill: self.thumb.background,
            stroke: None,
            shadow: None,
        };
        if let Some(shadow) = self.thumb.shadow {
            thumb_style = thumb_style.with_shadow(shadow);
        }
        canvas.draw_box(
            thumb_rect,
            CornerRadius::uniform(self.thumb.corner_radius),
            &thumb_style,
        );
        if let Some(image) = &self.thumb.contents {
            canvas.draw_image(image, thumb_rect, self.thumb.gravity);
        }
    }

    fn paint_content(canvas: &mut dyn Canvas, node: &ContentLayer, origin: Point) {
        let rect = node.layer.frame.offset(origin);
        match &node.kind {
            ContentKind::Text(text) => canvas.draw_text(
                &text.string,
                rect.origin(),
                &TextStyle {
                    size: text.font_size,
                    color: text.color,
                    weight: FontWeight::Bold,
                    align: TextAlign::Center,
                },
            ),
            ContentKind::Image => {
                if let Some(image) = &node.layer.contents {
                    canvas.draw_image(image, rect, node.layer.gravity);
                }
            }
        }
    }
}
