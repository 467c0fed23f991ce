//! Control state and the value-changed message.

use serde::{Deserialize, Serialize};

/// Interaction state that drives geometry and appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    /// Current value
    pub is_on: bool,
    /// A press is in flight
    pub is_pressed: bool,
}

impl ControlState {
    /// Resting state with the given value.
    #[must_use]
    pub const fn new(is_on: bool) -> Self {
        Self {
            is_on,
            is_pressed: false,
        }
    }

    /// Whether the thumb is widened for this press.
    #[must_use]
    pub const fn is_stretched(&self, stretch_enabled: bool) -> bool {
        self.is_pressed && stretch_enabled
    }

    /// Whether the inner mask collapses to nothing.
    #[must_use]
    pub const fn is_inner_hidden(&self, stretch_enabled: bool) -> bool {
        self.is_on || self.is_stretched(stretch_enabled)
    }
}

/// Message emitted when the switch value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchChanged {
    /// New value
    pub on: bool,
}
