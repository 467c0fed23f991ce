//! Swipe recognition from touch and mouse events.
//!
//! The recognizer tracks each active touch (the mouse counts as one touch)
//! and emits a single [`Event::GestureSwipe`] once the touch has travelled
//! far enough along one axis, quickly enough. A touch that produced a swipe is
//! not reported again until it is lifted.

use crate::event::{Event, MouseButton, SwipeDirection, TouchId};
use crate::geometry::Point;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Touch id used for the primary mouse button.
pub const MOUSE_TOUCH_ID: TouchId = TouchId(u32::MAX);

/// Configuration for swipe recognition.
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum travel along the dominant axis (in pixels).
    pub swipe_min_distance: f32,
    /// Maximum time from touch down to recognition (in milliseconds).
    pub swipe_max_duration_ms: u64,
    /// Dominant axis travel must exceed the other axis by this factor.
    pub swipe_axis_ratio: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_min_distance: 20.0,
            swipe_max_duration_ms: 500,
            swipe_axis_ratio: 2.0,
        }
    }
}

/// Active touch point being tracked.
#[derive(Debug, Clone)]
pub struct TouchPoint {
    /// Touch ID.
    pub id: TouchId,
    /// Starting position.
    pub start_position: Point,
    /// Current position.
    pub current_position: Point,
    /// When the touch started.
    pub start_time: Instant,
    /// Whether this touch already produced a swipe.
    pub swiped: bool,
}

impl TouchPoint {
    /// Create a new touch point.
    pub fn new(id: TouchId, position: Point) -> Self {
        Self {
            id,
            start_position: position,
            current_position: position,
            start_time: Instant::now(),
            swiped: false,
        }
    }

    /// Update the touch point position.
    pub fn update(&mut self, position: Point) {
        self.current_position = position;
    }

    /// Get the translation from start.
    pub fn translation(&self) -> Point {
        self.current_position - self.start_position
    }

    /// Get duration since touch started.
    pub fn duration(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Swipe recognizer.
#[derive(Debug)]
pub struct SwipeRecognizer {
    config: GestureConfig,
    touches: HashMap<TouchId, TouchPoint>,
}

impl SwipeRecognizer {
    /// Create a new recognizer with default config.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Create a new recognizer with custom config.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            touches: HashMap::new(),
        }
    }

    /// Get the current gesture configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Get the number of active touches.
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Get an active touch by ID.
    pub fn touch(&self, id: TouchId) -> Option<&TouchPoint> {
        self.touches.get(&id)
    }

    /// Process an event and return a swipe if one was recognized.
    pub fn process(&mut self, event: &Event) -> Option<Event> {
        match event {
            Event::TouchStart { id, position } => self.on_touch_start(*id, *position),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.on_touch_start(MOUSE_TOUCH_ID, *position),
            Event::TouchMove { id, position } => self.on_touch_move(*id, *position),
            Event::MouseMove { position } => self.on_touch_move(MOUSE_TOUCH_ID, *position),
            Event::TouchEnd { id, position } => self.on_touch_end(*id, *position),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.on_touch_end(MOUSE_TOUCH_ID, *position),
            Event::TouchCancel { id } => {
                self.touches.remove(id);
                None
            }
            _ => None,
        }
    }

    /// Reset the recognizer state.
    pub fn reset(&mut self) {
        self.touches.clear();
    }

    fn on_touch_start(&mut self, id: TouchId, position: Point) -> Option<Event> {
        self.touches.insert(id, TouchPoint::new(id, position));
        None
    }

    fn on_touch_move(&mut self, id: TouchId, position: Point) -> Option<Event> {
        let touch = self.touches.get_mut(&id)?;
        touch.update(position);
        Self::recognize(&self.config, touch)
    }

    fn on_touch_end(&mut self, id: TouchId, position: Point) -> Option<Event> {
        let mut touch = self.touches.remove(&id)?;
        touch.update(position);
        Self::recognize(&self.config, &mut touch)
    }

    fn recognize(config: &GestureConfig, touch: &mut TouchPoint) -> Option<Event> {
        if touch.swiped {
            return None;
        }
        if touch.duration().as_millis() > u128::from(config.swipe_max_duration_ms) {
            return None;
        }

        let delta = touch.translation();
        let (dx, dy) = (delta.x.abs(), delta.y.abs());

        let direction = if dx >= config.swipe_min_distance && dx > dy * config.swipe_axis_ratio {
            if delta.x < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            }
        } else if dy >= config.swipe_min_distance && dy > dx * config.swipe_axis_ratio {
            if delta.y < 0.0 {
                SwipeDirection::Up
            } else {
                SwipeDirection::Down
            }
        } else {
            return None;
        };

        touch.swiped = true;
        Some(Event::GestureSwipe {
            direction,
            start: touch.start_position,
        })
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
