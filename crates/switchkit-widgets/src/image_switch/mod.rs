//! Layer-composited toggle switch with text or image content.
//!
//! [`ImageSwitch`] owns a [`LayerTree`] and keeps it consistent with its
//! [`SwitchStyle`] and [`ControlState`]: every setter and every interaction
//! rebuilds appearance and relays out immediately.

pub mod geometry;
mod input;
mod layers;
mod state;
mod style;

pub use input::{swipe_allowed, transition_for, ControlEvent, TouchTracker, Transition};
pub use layers::{
    ContentKind, ContentLayer, GradientLayer, Layer, LayerId, LayerRole, LayerTree, TextContent,
};
pub use state::{ControlState, SwitchChanged};
pub use style::{resolve, Content, Shape, Side, SwitchStyle};

use crate::config::SwitchConfig;
use crate::error::ConfigError;
use std::any::Any;
use std::fmt;
use switchkit_core::{
    Canvas, Color, Constraints, EstimatedTextMeasurer, Event, ImageRef, LayoutResult, Rect,
    Shadow, Size, SwipeDirection, TextMeasurer, TypeId, Widget,
};
use tracing::debug;

/// Callback invoked with the new value after every value change.
pub type ValueChangeHandler = Box<dyn FnMut(bool) + Send + Sync>;

/// Toggle switch drawn as a stack of layers.
pub struct ImageSwitch {
    style: SwitchStyle,
    state: ControlState,
    bounds: Rect,
    layers: LayerTree,
    tracker: TouchTracker,
    measurer: Box<dyn TextMeasurer>,
    value_change: Option<ValueChangeHandler>,
    sent_actions: Vec<SwitchChanged>,
}

impl Default for ImageSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ImageSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageSwitch")
            .field("style", &self.style)
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("measurer", &self.measurer)
            .field("has_value_change", &self.value_change.is_some())
            .finish_non_exhaustive()
    }
}

impl ImageSwitch {
    /// Size the switch asks for when unconstrained.
    pub const INTRINSIC_SIZE: Size = Size::new(64.0, 40.0);

    /// Create an off switch with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(SwitchStyle::default())
    }

    /// Create an off switch with `style`.
    #[must_use]
    pub fn with_style(mut style: SwitchStyle) -> Self {
        style.apply_thumb_image();
        let state = ControlState::default();
        let mut switch = Self {
            layers: LayerTree::new(&style, state),
            style,
            state,
            bounds: Rect::from_size(Self::INTRINSIC_SIZE),
            tracker: TouchTracker::new(),
            measurer: Box::new(EstimatedTextMeasurer::default()),
            value_change: None,
            sent_actions: Vec::new(),
        };
        switch.layers.begin_transaction(false);
        switch.reconcile_declared_content();
        switch.relayout();
        switch.layers.commit_transaction();
        switch
    }

    /// Create a switch from a loaded configuration.
    pub fn from_config(config: SwitchConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_style(config.into_style()?))
    }

    /// Set the initial value without notifying.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.layers.begin_transaction(false);
        self.state.is_on = on;
        self.refresh();
        self.layers.commit_transaction();
        self
    }

    /// Register the value-change callback.
    #[must_use]
    pub fn on_value_change(mut self, handler: impl FnMut(bool) + Send + Sync + 'static) -> Self {
        self.value_change = Some(Box::new(handler));
        self
    }

    /// Use `measurer` for label sizes.
    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.set_text_measurer(measurer);
        self
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Current value.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.is_on
    }

    /// Whether a press is in flight.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.state.is_pressed
    }

    /// Interaction state.
    #[must_use]
    pub const fn state(&self) -> ControlState {
        self.state
    }

    /// Current style.
    #[must_use]
    pub const fn style(&self) -> &SwitchStyle {
        &self.style
    }

    /// The retained layers.
    #[must_use]
    pub const fn layers(&self) -> &LayerTree {
        &self.layers
    }

    /// Drain the value-changed messages sent since the last call.
    pub fn take_sent_actions(&mut self) -> Vec<SwitchChanged> {
        std::mem::take(&mut self.sent_actions)
    }

    /// Replace the value-change callback.
    pub fn set_value_change(&mut self, handler: Option<ValueChangeHandler>) {
        self.value_change = handler;
    }

    /// Replace the text measurer and relayout.
    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.measurer = Box::new(measurer);
        self.relayout();
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Enter the pressed state.
    pub fn touch_down(&mut self) {
        self.state.is_pressed = true;
        debug!(is_on = self.state.is_on, "switch pressed");
        self.relayout();
    }

    /// Flip the value, notify, then leave the pressed state.
    pub fn touch_up_inside(&mut self) -> SwitchChanged {
        self.state.is_on = !self.state.is_on;
        debug!(is_on = self.state.is_on, "switch toggled");
        self.layers.rebuild_appearance(&self.style, self.state);
        let changed = self.notify();
        self.touch_drag_exit_or_cancel();
        changed
    }

    /// Leave the pressed state.
    pub fn touch_drag_exit_or_cancel(&mut self) {
        self.state.is_pressed = false;
        debug!(is_on = self.state.is_on, "switch released");
        self.relayout();
    }

    /// Apply a swipe. Only a left swipe while on or a right swipe while off
    /// toggles; anything else does nothing.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<SwitchChanged> {
        if swipe_allowed(direction, self.state) {
            Some(self.touch_up_inside())
        } else {
            debug!(?direction, is_on = self.state.is_on, "swipe ignored");
            None
        }
    }

    /// Set the value, relayout and notify.
    ///
    /// With `animated` false the resulting layer changes are flagged as
    /// immediate.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        self.layers.begin_transaction(animated);
        self.state.is_on = on;
        debug!(is_on = on, animated, "switch value set");
        self.refresh();
        self.notify();
        self.layers.commit_transaction();
    }

    /// React to a control event.
    pub fn handle_control_event(&mut self, event: ControlEvent) -> Option<SwitchChanged> {
        match transition_for(event, self.state) {
            Transition::Press => {
                self.touch_down();
                None
            }
            Transition::Release => {
                self.touch_drag_exit_or_cancel();
                None
            }
            Transition::Toggle => Some(self.touch_up_inside()),
            Transition::Ignore => None,
        }
    }

    fn notify(&mut self) -> SwitchChanged {
        let changed = SwitchChanged {
            on: self.state.is_on,
        };
        if let Some(handler) = self.value_change.as_mut() {
            handler(changed.on);
        }
        self.sent_actions.push(changed);
        changed
    }

    // =========================================================================
    // Style setters
    // =========================================================================

    /// Replace the whole style.
    pub fn set_style(&mut self, mut style: SwitchStyle) {
        style.apply_thumb_image();
        self.style = style;
        self.reconcile_declared_content();
        self.refresh();
    }

    /// Set the outline shape.
    pub fn set_shape(&mut self, shape: Shape) {
        self.restyle(|s| s.shape = shape);
    }

    /// Set the thumb corner radius used by square switches.
    pub fn set_thumb_corner_radius(&mut self, radius: f32) {
        self.restyle(|s| s.thumb_corner_radius = radius);
    }

    /// Enable or disable widening the thumb while pressed.
    pub fn set_stretch_enabled(&mut self, enabled: bool) {
        self.restyle(|s| s.stretch_enabled = enabled);
    }

    /// Set the track border width.
    pub fn set_border_width(&mut self, width: f32) {
        self.restyle(|s| s.border_width = width);
    }

    /// Set or clear the border color override.
    pub fn set_border_color(&mut self, color: Option<Color>) {
        self.restyle(|s| s.border_color = color);
    }

    /// Set the border color used while on.
    pub fn set_on_border_color(&mut self, color: Color) {
        self.restyle(|s| s.on_border_color = color);
    }

    /// Set the border color used while off.
    pub fn set_off_border_color(&mut self, color: Color) {
        self.restyle(|s| s.off_border_color = color);
    }

    /// Set or clear the text color override.
    pub fn set_text_color(&mut self, color: Option<Color>) {
        self.restyle(|s| s.text_color = color);
    }

    /// Set the on label color.
    pub fn set_on_text_color(&mut self, color: Color) {
        self.restyle(|s| s.on_text_color = color);
    }

    /// Set the off label color.
    pub fn set_off_text_color(&mut self, color: Color) {
        self.restyle(|s| s.off_text_color = color);
    }

    /// Set the track inset.
    pub fn set_track_top_bottom_padding(&mut self, padding: f32) {
        self.restyle(|s| s.track_top_bottom_padding = padding);
    }

    /// Set the padding used when centering content beside the thumb.
    pub fn set_content_leading_trailing_padding(&mut self, padding: f32) {
        self.restyle(|s| s.content_leading_trailing_padding = padding);
    }

    /// Set the gap between thumb and border.
    pub fn set_thumb_radius_padding(&mut self, padding: f32) {
        self.restyle(|s| s.thumb_radius_padding = padding);
    }

    /// Set the track fill used while on.
    pub fn set_on_tint_color(&mut self, color: Color) {
        self.restyle(|s| s.on_tint_color = color);
    }

    /// Set the track fill used while off.
    pub fn set_off_tint_color(&mut self, color: Color) {
        self.restyle(|s| s.off_tint_color = color);
    }

    /// Set the gradient stops used while on. Fewer than two disables it.
    pub fn set_on_tint_colors(&mut self, colors: Vec<Color>) {
        self.restyle(|s| s.on_tint_colors = colors);
    }

    /// Set or clear the thumb fill override.
    pub fn set_thumb_tint_color(&mut self, color: Option<Color>) {
        self.restyle(|s| s.thumb_tint_color = color);
    }

    /// Set the thumb fill used while on.
    pub fn set_on_thumb_tint_color(&mut self, color: Color) {
        self.restyle(|s| s.on_thumb_tint_color = color);
    }

    /// Set the thumb fill used while off.
    pub fn set_off_thumb_tint_color(&mut self, color: Color) {
        self.restyle(|s| s.off_thumb_tint_color = color);
    }

    /// Set the fill of the inner mask.
    pub fn set_inner_color(&mut self, color: Color) {
        self.restyle(|s| s.inner_color = color);
    }

    /// Set the thumb shadow.
    pub fn set_thumb_shadow(&mut self, shadow: Shadow) {
        self.restyle(|s| s.thumb_shadow = shadow);
    }

    /// Set the thumb artwork used while on.
    pub fn set_on_thumb_image(&mut self, image: Option<ImageRef>) {
        self.restyle(|s| s.on_thumb_image = image);
    }

    /// Set the thumb artwork used while off.
    pub fn set_off_thumb_image(&mut self, image: Option<ImageRef>) {
        self.restyle(|s| s.off_thumb_image = image);
    }

    /// Set the thumb artwork for both states.
    ///
    /// The image is copied into the on/off slots; clearing it leaves them.
    pub fn set_thumb_image(&mut self, image: Option<ImageRef>) {
        self.restyle(|s| {
            s.thumb_image = image;
            s.apply_thumb_image();
        });
    }

    // =========================================================================
    // Content setters
    // =========================================================================

    /// Show `text` while on. `None` removes whatever the on side shows.
    pub fn set_on_text(&mut self, text: Option<String>) {
        let content = Content::from_text(text.as_deref());
        self.style.on_text = text;
        self.set_content(Side::On, &content);
    }

    /// Show `text` while off. `None` removes whatever the off side shows.
    pub fn set_off_text(&mut self, text: Option<String>) {
        let content = Content::from_text(text.as_deref());
        self.style.off_text = text;
        self.set_content(Side::Off, &content);
    }

    /// Show `image` while on. `None` removes whatever the on side shows.
    pub fn set_on_image(&mut self, image: Option<ImageRef>) {
        let content = Content::from_image(image.as_ref());
        self.style.on_image = image;
        self.set_content(Side::On, &content);
    }

    /// Show `image` while off. `None` removes whatever the off side shows.
    pub fn set_off_image(&mut self, image: Option<ImageRef>) {
        let content = Content::from_image(image.as_ref());
        self.style.off_image = image;
        self.set_content(Side::Off, &content);
    }

    fn set_content(&mut self, side: Side, content: &Content) {
        self.layers.reconcile_content(side, content, &self.style);
        self.relayout();
    }

    fn reconcile_declared_content(&mut self) {
        for side in [Side::On, Side::Off] {
            let content = self.style.content_for(side);
            self.layers.reconcile_content(side, &content, &self.style);
        }
    }

    fn restyle(&mut self, f: impl FnOnce(&mut SwitchStyle)) {
        f(&mut self.style);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.layers.rebuild_appearance(&self.style, self.state);
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layers.relayout(
            self.bounds.local(),
            &self.style,
            self.state,
            self.measurer.as_ref(),
        );
    }
}

impl Widget for ImageSwitch {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Self::INTRINSIC_SIZE)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.relayout();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        self.layers.paint(canvas, self.bounds.origin());
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let mut changed = None;
        for control in self.tracker.translate(event, self.bounds) {
            if let Some(message) = self.handle_control_event(control) {
                changed = Some(message);
            }
        }
        changed.map(|message| Box::new(message) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use switchkit_core::{Point, RecordingCanvas, TouchId};

    fn laid_out() -> ImageSwitch {
        let mut switch = ImageSwitch::new();
        switch.layout(Rect::new(0.0, 0.0, 64.0, 40.0));
        switch
    }

    const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_defaults() {
        let switch = ImageSwitch::new();
        assert!(!switch.is_on());
        assert!(!switch.is_pressed());
        assert_eq!(switch.style(), &SwitchStyle::default());
        assert_eq!(switch.bounds(), Rect::new(0.0, 0.0, 64.0, 40.0));
        assert!(switch.is_interactive());
    }

    #[test]
    fn test_measure_intrinsic() {
        let switch = ImageSwitch::new();
        assert_eq!(
            switch.measure(Constraints::unbounded()),
            Size::new(64.0, 40.0)
        );
        assert_eq!(
            switch.measure(Constraints::tight(Size::new(100.0, 50.0))),
            Size::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_builder_on_does_not_notify() {
        let mut switch = ImageSwitch::new().on(true);
        assert!(switch.is_on());
        assert!(switch.take_sent_actions().is_empty());
        assert_eq!(switch.layers().track().background, Some(Color::GREEN));
    }

    #[test]
    fn test_with_style_builds_declared_content() {
        let switch = ImageSwitch::with_style(SwitchStyle {
            on_text: Some("ON".into()),
            off_image: Some(ImageRef::new("moon")),
            ..SwitchStyle::default()
        });
        let layers = switch.layers();
        assert!(layers.content(Side::On).and_then(ContentLayer::text).is_some());
        assert_eq!(
            layers.content(Side::Off).and_then(ContentLayer::image),
            Some(&ImageRef::new("moon"))
        );
    }

    #[test]
    fn test_from_config() {
        let config = SwitchConfig::from_yaml("shape: square\noff_text: \"OFF\"").unwrap();
        let switch = ImageSwitch::from_config(config).unwrap();
        assert_eq!(switch.style().shape, Shape::Square);
        assert!(switch.layers().content(Side::Off).is_some());
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    #[test]
    fn test_touch_down_keeps_value() {
        let mut switch = laid_out();
        switch.touch_down();
        assert!(switch.is_pressed());
        assert!(!switch.is_on());
        assert!(switch.take_sent_actions().is_empty());
        assert!((switch.layers().thumb().frame.width - 39.6).abs() < 1e-4);
    }

    #[test]
    fn test_touch_up_inside_toggles_and_releases() {
        let mut switch = laid_out();
        switch.touch_down();
        let changed = switch.touch_up_inside();
        assert_eq!(changed, SwitchChanged { on: true });
        assert!(switch.is_on());
        assert!(!switch.is_pressed());
        assert_eq!(
            switch.layers().thumb().frame,
            Rect::new(27.5, 3.5, 33.0, 33.0)
        );
        assert_eq!(switch.take_sent_actions(), vec![SwitchChanged { on: true }]);
    }

    fn frames(switch: &ImageSwitch) -> Vec<(LayerRole, Rect, f32)> {
        switch
            .layers()
            .layers()
            .into_iter()
            .map(|(role, layer)| (role, layer.frame, layer.corner_radius))
            .collect()
    }

    fn decorated(on: bool) -> ImageSwitch {
        let mut switch = ImageSwitch::new().on(on);
        switch.set_on_text(Some("ON".into()));
        switch.set_off_image(Some(ImageRef::new("moon")));
        switch.set_on_tint_colors(vec![Color::GREEN, Color::BLACK]);
        switch.set_border_width(2.0);
        switch.set_track_top_bottom_padding(1.5);
        switch.set_thumb_radius_padding(2.0);
        switch.layout(Rect::new(5.0, 7.0, 90.0, 52.0));
        switch
    }

    #[test]
    fn test_double_toggle_restores_value() {
        let mut switch = laid_out();
        switch.touch_up_inside();
        switch.touch_up_inside();
        assert!(!switch.is_on());
        assert_eq!(switch.take_sent_actions().len(), 2);
    }

    #[test]
    fn test_double_toggle_restores_every_layer() {
        for start in [false, true] {
            let mut switch = decorated(start);
            let before = frames(&switch);

            switch.touch_up_inside();
            assert_ne!(frames(&switch), before);
            switch.touch_up_inside();
            assert_eq!(frames(&switch), before);

            switch.set_on(!start, false);
            switch.set_on(start, true);
            assert_eq!(switch.is_on(), start);
            assert_eq!(frames(&switch), before);
        }
    }

    #[test]
    fn test_drag_exit_releases_without_toggle() {
        let mut switch = laid_out();
        switch.touch_down();
        switch.touch_drag_exit_or_cancel();
        assert!(!switch.is_pressed());
        assert!(!switch.is_on());
        assert_eq!(switch.layers().thumb().frame.width, 33.0);
    }

    #[test]
    fn test_swipe_rules() {
        let mut switch = laid_out();
        assert_eq!(switch.swipe(SwipeDirection::Left), None);
        assert!(!switch.is_on());

        assert_eq!(
            switch.swipe(SwipeDirection::Right),
            Some(SwitchChanged { on: true })
        );
        assert!(switch.is_on());

        assert_eq!(switch.swipe(SwipeDirection::Right), None);
        assert_eq!(switch.swipe(SwipeDirection::Up), None);
        assert!(switch.is_on());

        assert!(switch.swipe(SwipeDirection::Left).is_some());
        assert!(!switch.is_on());
    }

    #[test]
    fn test_set_on_notifies_and_flags_animation() {
        let mut switch = laid_out();
        switch.set_on(true, false);
        assert!(switch.is_on());
        assert_eq!(switch.take_sent_actions(), vec![SwitchChanged { on: true }]);
        assert!(!switch.layers().thumb().last_change_animated());

        switch.set_on(false, true);
        assert!(switch.layers().thumb().last_change_animated());
    }

    #[test]
    fn test_set_on_same_value_still_notifies() {
        let mut switch = laid_out();
        switch.set_on(false, true);
        assert_eq!(switch.take_sent_actions(), vec![SwitchChanged { on: false }]);
    }

    #[test]
    fn test_value_change_callback() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut switch = ImageSwitch::new().on_value_change(move |on| {
            sink.lock().unwrap().push(on);
        });
        switch.touch_up_inside();
        switch.set_on(false, false);
        switch.swipe(SwipeDirection::Left);
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_callback_can_be_cleared() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut switch = ImageSwitch::new().on_value_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        switch.touch_up_inside();
        switch.set_value_change(None);
        switch.touch_up_inside();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_event_tap_returns_message() {
        let mut switch = laid_out();
        let p = Point::new(20.0, 20.0);
        assert!(switch
            .event(&Event::TouchStart {
                id: TouchId(1),
                position: p
            })
            .is_none());
        assert!(switch.is_pressed());

        let message = switch
            .event(&Event::TouchEnd {
                id: TouchId(1),
                position: p,
            })
            .expect("value changed");
        let changed = message.downcast_ref::<SwitchChanged>().unwrap();
        assert!(changed.on);
        assert!(!switch.is_pressed());
    }

    #[test]
    fn test_event_uses_layout_origin() {
        let mut switch = ImageSwitch::new();
        switch.layout(Rect::new(100.0, 100.0, 64.0, 40.0));
        assert!(switch
            .event(&Event::TouchStart {
                id: TouchId(1),
                position: Point::new(20.0, 20.0)
            })
            .is_none());
        assert!(!switch.is_pressed());

        switch.event(&Event::TouchStart {
            id: TouchId(2),
            position: Point::new(120.0, 120.0),
        });
        assert!(switch.is_pressed());
    }

    #[test]
    fn test_event_swipe_left_when_off_is_noop() {
        let mut switch = laid_out();
        let result = switch.event(&Event::GestureSwipe {
            direction: SwipeDirection::Left,
            start: Point::new(40.0, 20.0),
        });
        assert!(result.is_none());
        assert!(!switch.is_on());
        assert!(switch.take_sent_actions().is_empty());
    }

    #[test]
    fn test_event_drag_swipe_right_turns_on() {
        let mut switch = laid_out();
        switch.event(&Event::MouseDown {
            position: Point::new(10.0, 20.0),
            button: switchkit_core::MouseButton::Left,
        });
        let message = switch.event(&Event::MouseMove {
            position: Point::new(45.0, 22.0),
        });
        assert!(message.is_some());
        assert!(switch.is_on());
        assert!(!switch.is_pressed());
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    #[test]
    fn test_gradient_removed_when_toggled_off() {
        let mut switch = laid_out();
        switch.set_on_tint_colors(vec![RED, BLUE]);
        assert!(switch.layers().gradient().is_none());

        switch.touch_up_inside();
        assert!(switch.layers().gradient().is_some());

        switch.set_off_tint_color(RED);
        switch.touch_up_inside();
        assert!(switch.layers().gradient().is_none());
        assert_eq!(switch.layers().track().background, Some(RED));
    }

    #[test]
    fn test_single_stop_gradient_ignored() {
        let mut switch = laid_out().on(true);
        switch.set_on_tint_colors(vec![RED]);
        assert!(switch.layers().gradient().is_none());
        assert_eq!(switch.layers().track().background, Some(Color::GREEN));
    }

    #[test]
    fn test_border_and_thumb_colors_follow_value() {
        let mut switch = laid_out();
        switch.set_border_width(2.0);
        switch.set_on_border_color(RED);
        switch.set_off_border_color(BLUE);
        switch.set_on_thumb_tint_color(BLUE);
        assert_eq!(
            switch.layers().track().border.map(|b| b.color),
            Some(BLUE)
        );

        switch.touch_up_inside();
        assert_eq!(switch.layers().track().border.map(|b| b.color), Some(RED));
        assert_eq!(switch.layers().thumb().background, Some(BLUE));

        switch.set_border_color(Some(Color::BLACK));
        assert_eq!(
            switch.layers().track().border.map(|b| b.color),
            Some(Color::BLACK)
        );
    }

    #[test]
    fn test_text_color_override_and_pairs() {
        let mut switch = laid_out();
        switch.set_on_text(Some("ON".into()));
        switch.set_off_text(Some("OFF".into()));
        switch.set_on_text_color(RED);
        switch.set_off_text_color(BLUE);
        let color = |s: &ImageSwitch, side| {
            s.layers()
                .content(side)
                .and_then(ContentLayer::text)
                .map(|t| t.color)
        };
        assert_eq!(color(&switch, Side::On), Some(RED));
        assert_eq!(color(&switch, Side::Off), Some(BLUE));

        switch.set_text_color(Some(Color::BLACK));
        assert_eq!(color(&switch, Side::On), Some(Color::BLACK));
        assert_eq!(color(&switch, Side::Off), Some(Color::BLACK));
    }

    #[test]
    fn test_thumb_image_snapshot_and_artwork() {
        let mut switch = laid_out();
        switch.set_on_thumb_image(Some(ImageRef::new("sun")));
        switch.set_off_thumb_image(Some(ImageRef::new("moon")));
        assert_eq!(
            switch.layers().thumb().contents,
            Some(ImageRef::new("moon"))
        );

        switch.touch_up_inside();
        assert_eq!(switch.layers().thumb().contents, Some(ImageRef::new("sun")));

        switch.set_thumb_image(Some(ImageRef::new("dot")));
        assert_eq!(switch.layers().thumb().contents, Some(ImageRef::new("dot")));

        switch.set_thumb_image(None);
        assert_eq!(switch.layers().thumb().contents, Some(ImageRef::new("dot")));
        switch.set_on_thumb_image(Some(ImageRef::new("star")));
        assert_eq!(
            switch.layers().thumb().contents,
            Some(ImageRef::new("star"))
        );
    }

    #[test]
    fn test_geometry_setters_relayout() {
        let mut switch = laid_out();
        switch.set_thumb_radius_padding(5.0);
        assert_eq!(
            switch.layers().thumb().frame,
            Rect::new(5.0, 5.0, 30.0, 30.0)
        );

        switch.set_shape(Shape::Square);
        switch.set_thumb_corner_radius(6.0);
        assert_eq!(switch.layers().thumb().corner_radius, 6.0);
        assert!((switch.layers().track().corner_radius - 4.8).abs() < 1e-4);

        switch.set_track_top_bottom_padding(2.0);
        assert_eq!(
            switch.layers().track().frame,
            Rect::new(2.0, 2.0, 60.0, 36.0)
        );

        switch.set_stretch_enabled(false);
        switch.touch_down();
        assert_eq!(switch.layers().thumb().frame.width, 30.0);
        assert!(!switch.layers().inner().frame.size().is_empty());
    }

    // =========================================================================
    // Content
    // =========================================================================

    #[test]
    fn test_text_then_image_replaces_node() {
        let mut switch = laid_out();
        switch.set_off_text(Some("OFF".into()));
        let text_id = switch
            .layers()
            .content(Side::Off)
            .map(|n| n.layer.id())
            .unwrap();

        switch.set_off_image(Some(ImageRef::new("moon")));
        let node = switch.layers().content(Side::Off).unwrap();
        assert_ne!(node.layer.id(), text_id);
        assert_eq!(node.image(), Some(&ImageRef::new("moon")));
        assert_eq!(node.layer.frame.size(), Size::square(23.5));
    }

    #[test]
    fn test_clearing_text_after_image_removes_image() {
        let mut switch = laid_out();
        switch.set_off_text(Some("OFF".into()));
        switch.set_off_image(Some(ImageRef::new("moon")));
        switch.set_off_text(None);
        assert!(switch.layers().content(Side::Off).is_none());
    }

    #[test]
    fn test_same_kind_update_keeps_node() {
        let mut switch = laid_out();
        switch.set_on_text(Some("ON".into()));
        let id = switch.layers().content(Side::On).map(|n| n.layer.id());
        switch.set_on_text(Some("YES".into()));
        let node = switch.layers().content(Side::On).unwrap();
        assert_eq!(Some(node.layer.id()), id);
        assert_eq!(node.text().map(|t| t.string.as_str()), Some("YES"));
    }

    #[test]
    fn test_content_visibility_follows_value() {
        let mut switch = laid_out();
        switch.set_on_text(Some("ON".into()));
        switch.set_off_text(Some("OFF".into()));
        let frame = |s: &ImageSwitch, side| s.layers().content(side).unwrap().layer.frame;
        let bounds = Rect::new(0.0, 0.0, 64.0, 40.0);

        assert!(frame(&switch, Side::On).max_x() <= 0.0);
        assert!(frame(&switch, Side::Off).x >= 0.0);
        assert!(frame(&switch, Side::Off).max_x() <= bounds.max_x());

        switch.touch_up_inside();
        assert!(frame(&switch, Side::On).x >= 0.0);
        assert_eq!(frame(&switch, Side::Off).x, 64.0);
    }

    #[test]
    fn test_large_switch_font_size() {
        let mut switch = ImageSwitch::new();
        switch.set_off_text(Some("OFF".into()));
        switch.layout(Rect::new(0.0, 0.0, 160.0, 100.0));
        let text = switch
            .layers()
            .content(Side::Off)
            .and_then(ContentLayer::text)
            .unwrap();
        assert_eq!(text.font_size, 20.0);
    }

    #[test]
    fn test_set_style_reconciles_content() {
        let mut switch = laid_out();
        switch.set_on_text(Some("ON".into()));
        switch.set_style(SwitchStyle {
            off_image: Some(ImageRef::new("moon")),
            ..SwitchStyle::default()
        });
        assert!(switch.layers().content(Side::On).is_none());
        assert!(switch.layers().content(Side::Off).is_some());
    }

    // =========================================================================
    // Painting
    // =========================================================================

    #[test]
    fn test_paint_offsets_by_bounds() {
        let mut switch = ImageSwitch::new();
        switch.layout(Rect::new(10.0, 20.0, 64.0, 40.0));
        let mut canvas = RecordingCanvas::new();
        switch.paint(&mut canvas);
        let first = canvas.commands()[0].bounds();
        assert_eq!(first, Some(Rect::new(10.0, 20.0, 64.0, 40.0)));
    }

    #[test]
    fn test_debug_hides_callback() {
        let switch = ImageSwitch::new().on_value_change(|_| {});
        let debug = format!("{switch:?}");
        assert!(debug.contains("ImageSwitch"));
        assert!(debug.contains("has_value_change: true"));
    }
}
