//! Layer-composited image toggle switch.
//!
//! [`ImageSwitch`] is a two-state control drawn as a stack of layers: a
//! track, an optional gradient, an inner mask, clipped on/off content (text
//! or images) and a thumb. Hosts drive it through the
//! [`Widget`](switchkit_core::Widget) trait, style it with setters or a
//! [`SwitchConfig`], and observe changes through a callback or the
//! [`SwitchChanged`] message.
//!
//! ```
//! use switchkit_core::{RecordingCanvas, Rect, Widget};
//! use switchkit_widgets::ImageSwitch;
//!
//! let mut switch = ImageSwitch::new();
//! switch.set_off_text(Some("OFF".into()));
//! switch.layout(Rect::new(0.0, 0.0, 64.0, 40.0));
//!
//! switch.touch_up_inside();
//! assert!(switch.is_on());
//!
//! let mut canvas = RecordingCanvas::new();
//! switch.paint(&mut canvas);
//! assert!(!canvas.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod image_switch;

pub use config::SwitchConfig;
pub use error::ConfigError;
pub use image_switch::{
    ContentLayer, ControlEvent, ControlState, ImageSwitch, LayerTree, Shape, Side, SwitchChanged,
    SwitchStyle, ValueChangeHandler,
};
