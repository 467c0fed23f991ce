//! Translation of raw pointer input into control events.
//!
//! One touch (or the left mouse button) is tracked at a time, from a press
//! inside the bounds until it ends. Every tracked event also feeds a
//! [`SwipeRecognizer`]; a recognized swipe cancels the tracked touch.

use super::state::ControlState;
use switchkit_core::gesture::MOUSE_TOUCH_ID;
use switchkit_core::{Event, MouseButton, Point, Rect, SwipeDirection, SwipeRecognizer, TouchId};

/// Control-level events the switch reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Press began inside the bounds
    TouchDown,
    /// Tracked touch moved back inside the bounds
    TouchDragEnter,
    /// Tracked touch left the bounds
    TouchDragExit,
    /// Tracked touch lifted inside the bounds
    TouchUpInside,
    /// Tracked touch lifted outside the bounds
    TouchUpOutside,
    /// Tracked touch was cancelled
    TouchCancel,
    /// A swipe was recognized
    Swipe(SwipeDirection),
}

/// What the switch does in response to a control event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Enter the pressed state
    Press,
    /// Leave the pressed state
    Release,
    /// Flip the value, notify, then release
    Toggle,
    /// Nothing
    Ignore,
}

/// Whether a swipe in `direction` may flip a switch in `state`.
///
/// Left swipes turn the switch off, right swipes turn it on.
#[must_use]
pub const fn swipe_allowed(direction: SwipeDirection, state: ControlState) -> bool {
    matches!(
        (direction, state.is_on),
        (SwipeDirection::Left, true) | (SwipeDirection::Right, false)
    )
}

/// The transition for `event` in `state`.
#[must_use]
pub const fn transition_for(event: ControlEvent, state: ControlState) -> Transition {
    match event {
        ControlEvent::TouchDown | ControlEvent::TouchDragEnter => Transition::Press,
        ControlEvent::TouchUpInside => Transition::Toggle,
        ControlEvent::TouchDragExit | ControlEvent::TouchUpOutside | ControlEvent::TouchCancel => {
            Transition::Release
        }
        ControlEvent::Swipe(direction) if swipe_allowed(direction, state) => Transition::Toggle,
        ControlEvent::Swipe(_) => Transition::Ignore,
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveTouch {
    id: TouchId,
    inside: bool,
}

/// Tracks the pointer against the switch bounds.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active: Option<ActiveTouch>,
    swipes: SwipeRecognizer,
}

impl TouchTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a touch is being tracked.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Control events produced by `event` for a switch occupying `bounds`.
    pub fn translate(&mut self, event: &Event, bounds: Rect) -> Vec<ControlEvent> {
        match *event {
            Event::TouchStart { id, position } => self.begin(id, position, bounds, event),
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.begin(MOUSE_TOUCH_ID, position, bounds, event),
            Event::TouchMove { id, position } => self.moved(id, position, bounds, event),
            Event::MouseMove { position } => self.moved(MOUSE_TOUCH_ID, position, bounds, event),
            Event::TouchEnd { id, position } => self.ended(id, position, bounds, event),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.ended(MOUSE_TOUCH_ID, position, bounds, event),
            Event::TouchCancel { id } => {
                if !self.owns(id) {
                    return Vec::new();
                }
                self.swipes.process(event);
                self.active = None;
                vec![ControlEvent::TouchCancel]
            }
            Event::GestureSwipe { direction, start } if bounds.contains_point(&start) => {
                let mut events = Vec::new();
                if self.active.take().is_some() {
                    events.push(ControlEvent::TouchCancel);
                }
                events.push(ControlEvent::Swipe(direction));
                events
            }
            _ => Vec::new(),
        }
    }

    /// Drop any tracked touch without emitting events.
    pub fn reset(&mut self) {
        self.active = None;
        self.swipes.reset();
    }

    fn owns(&self, id: TouchId) -> bool {
        self.active.is_some_and(|touch| touch.id == id)
    }

    fn begin(
        &mut self,
        id: TouchId,
        position: Point,
        bounds: Rect,
        event: &Event,
    ) -> Vec<ControlEvent> {
        if self.active.is_some() || !bounds.contains_point(&position) {
            return Vec::new();
        }
        self.swipes.process(event);
        self.active = Some(ActiveTouch { id, inside: true });
        vec![ControlEvent::TouchDown]
    }

    fn moved(
        &mut self,
        id: TouchId,
        position: Point,
        bounds: Rect,
        event: &Event,
    ) -> Vec<ControlEvent> {
        if !self.owns(id) {
            return Vec::new();
        }
        if let Some(swipe) = self.swipes.process(event) {
            return self.swiped(&swipe);
        }

        let inside = bounds.contains_point(&position);
        let Some(touch) = self.active.as_mut() else {
            return Vec::new();
        };
        if touch.inside == inside {
            return Vec::new();
        }
        touch.inside = inside;
        if inside {
            vec![ControlEvent::TouchDragEnter]
        } else {
            vec![ControlEvent::TouchDragExit]
        }
    }

    fn ended(
        &mut self,
        id: TouchId,
        position: Point,
        bounds: Rect,
        event: &Event,
    ) -> Vec<ControlEvent> {
        if !self.owns(id) {
            // Clears a touch that was already consumed by a swipe.
            self.swipes.process(event);
            return Vec::new();
        }
        if let Some(swipe) = self.swipes.process(event) {
            return self.swiped(&swipe);
        }
        self.active = None;
        if bounds.contains_point(&position) {
            vec![ControlEvent::TouchUpInside]
        } else {
            vec![ControlEvent::TouchUpOutside]
        }
    }

    fn swiped(&mut self, swipe: &Event) -> Vec<ControlEvent> {
        self.active = None;
        match *swipe {
            Event::GestureSwipe { direction, .. } => {
                vec![ControlEvent::TouchCancel, ControlEvent::Swipe(direction)]
            }
            _ => vec![ControlEvent::TouchCancel],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 64.0, 40.0)
    }

    fn touch(id: u32) -> TouchId {
        TouchId(id)
    }

    #[test]
    fn test_transitions() {
        let off = ControlState::new(false);
        assert_eq!(transition_for(ControlEvent::TouchDown, off), Transition::Press);
        assert_eq!(
            transition_for(ControlEvent::TouchDragEnter, off),
            Transition::Press
        );
        assert_eq!(
            transition_for(ControlEvent::TouchUpInside, off),
            Transition::Toggle
        );
        assert_eq!(
            transition_for(ControlEvent::TouchDragExit, off),
            Transition::Release
        );
        assert_eq!(
            transition_for(ControlEvent::TouchCancel, off),
            Transition::Release
        );
        assert_eq!(
            transition_for(ControlEvent::TouchUpOutside, off),
            Transition::Release
        );
    }

    #[test]
    fn test_swipe_rules() {
        let off = ControlState::new(false);
        let on = ControlState::new(true);
        assert!(swipe_allowed(SwipeDirection::Right, off));
        assert!(swipe_allowed(SwipeDirection::Left, on));
        assert!(!swipe_allowed(SwipeDirection::Left, off));
        assert!(!swipe_allowed(SwipeDirection::Right, on));
        assert!(!swipe_allowed(SwipeDirection::Up, off));
        assert!(!swipe_allowed(SwipeDirection::Down, on));

        assert_eq!(
            transition_for(ControlEvent::Swipe(SwipeDirection::Left), off),
            Transition::Ignore
        );
        assert_eq!(
            transition_for(ControlEvent::Swipe(SwipeDirection::Left), on),
            Transition::Toggle
        );
    }

    #[test]
    fn test_tap_inside() {
        let mut tracker = TouchTracker::new();
        let p = Point::new(20.0, 20.0);
        assert_eq!(
            tracker.translate(&Event::TouchStart { id: touch(1), position: p }, bounds()),
            vec![ControlEvent::TouchDown]
        );
        assert!(tracker.is_tracking());
        assert_eq!(
            tracker.translate(&Event::TouchEnd { id: touch(1), position: p }, bounds()),
            vec![ControlEvent::TouchUpInside]
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut tracker = TouchTracker::new();
        let outside = Point::new(100.0, 20.0);
        assert!(tracker
            .translate(&Event::TouchStart { id: touch(1), position: outside }, bounds())
            .is_empty());
        assert!(tracker
            .translate(&Event::TouchEnd { id: touch(1), position: outside }, bounds())
            .is_empty());
    }

    #[test]
    fn test_drag_exit_and_reenter() {
        let mut tracker = TouchTracker::new();
        tracker.translate(
            &Event::TouchStart {
                id: touch(1),
                position: Point::new(60.0, 30.0),
            },
            bounds(),
        );
        assert_eq!(
            tracker.translate(
                &Event::TouchMove {
                    id: touch(1),
                    position: Point::new(66.0, 35.0)
                },
                bounds()
            ),
            vec![ControlEvent::TouchDragExit]
        );
        assert!(tracker
            .translate(
                &Event::TouchMove {
                    id: touch(1),
                    position: Point::new(67.0, 36.0)
                },
                bounds()
            )
            .is_empty());
        assert_eq!(
            tracker.translate(
                &Event::TouchMove {
                    id: touch(1),
                    position: Point::new(62.0, 34.0)
                },
                bounds()
            ),
            vec![ControlEvent::TouchDragEnter]
        );
    }

    #[test]
    fn test_release_outside() {
        let mut tracker = TouchTracker::new();
        tracker.translate(
            &Event::TouchStart {
                id: touch(1),
                position: Point::new(32.0, 38.0),
            },
            bounds(),
        );
        assert_eq!(
            tracker.translate(
                &Event::TouchEnd {
                    id: touch(1),
                    position: Point::new(33.0, 48.0)
                },
                bounds()
            ),
            vec![ControlEvent::TouchUpOutside]
        );
    }

    #[test]
    fn test_fast_horizontal_drag_is_swipe() {
        let mut tracker = TouchTracker::new();
        tracker.translate(
            &Event::TouchStart {
                id: touch(1),
                position: Point::new(50.0, 20.0),
            },
            bounds(),
        );
        assert_eq!(
            tracker.translate(
                &Event::TouchMove {
                    id: touch(1),
                    position: Point::new(20.0, 21.0)
                },
                bounds()
            ),
            vec![
                ControlEvent::TouchCancel,
                ControlEvent::Swipe(SwipeDirection::Left)
            ]
        );
        assert!(!tracker.is_tracking());
        assert!(tracker
            .translate(
                &Event::TouchEnd {
                    id: touch(1),
                    position: Point::new(20.0, 21.0)
                },
                bounds()
            )
            .is_empty());
    }

    #[test]
    fn test_mouse_is_tracked_like_touch() {
        let mut tracker = TouchTracker::new();
        let p = Point::new(10.0, 10.0);
        assert_eq!(
            tracker.translate(
                &Event::MouseDown {
                    position: p,
                    button: MouseButton::Left
                },
                bounds()
            ),
            vec![ControlEvent::TouchDown]
        );
        assert!(tracker
            .translate(
                &Event::MouseUp {
                    position: p,
                    button: MouseButton::Right
                },
                bounds()
            )
            .is_empty());
        assert_eq!(
            tracker.translate(
                &Event::MouseUp {
                    position: p,
                    button: MouseButton::Left
                },
                bounds()
            ),
            vec![ControlEvent::TouchUpInside]
        );
    }

    #[test]
    fn test_second_touch_ignored() {
        let mut tracker = TouchTracker::new();
        let p = Point::new(10.0, 10.0);
        tracker.translate(&Event::TouchStart { id: touch(1), position: p }, bounds());
        assert!(tracker
            .translate(&Event::TouchStart { id: touch(2), position: p }, bounds())
            .is_empty());
        assert!(tracker
            .translate(&Event::TouchEnd { id: touch(2), position: p }, bounds())
            .is_empty());
        assert_eq!(
            tracker.translate(&Event::TouchCancel { id: touch(1) }, bounds()),
            vec![ControlEvent::TouchCancel]
        );
    }

    #[test]
    fn test_host_swipe_event() {
        let mut tracker = TouchTracker::new();
        let swipe = Event::GestureSwipe {
            direction: SwipeDirection::Right,
            start: Point::new(10.0, 10.0),
        };
        assert_eq!(
            tracker.translate(&swipe, bounds()),
            vec![ControlEvent::Swipe(SwipeDirection::Right)]
        );

        let elsewhere = Event::GestureSwipe {
            direction: SwipeDirection::Right,
            start: Point::new(200.0, 10.0),
        };
        assert!(tracker.translate(&elsewhere, bounds()).is_empty());
    }

    #[test]
    fn test_reset_drops_touch() {
        let mut tracker = TouchTracker::new();
        tracker.translate(
            &Event::TouchStart {
                id: touch(1),
                position: Point::new(10.0, 10.0),
            },
            bounds(),
        );
        tracker.reset();
        assert!(!tracker.is_tracking());
    }
}
