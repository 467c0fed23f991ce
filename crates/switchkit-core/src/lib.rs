//! Core types and traits for switchkit widgets.
//!
//! This crate provides the foundational types the widgets build on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Input: [`Event`] and the [`SwipeRecognizer`]
//! - Rendering: the [`Canvas`] trait, [`DrawCommand`]s and [`RecordingCanvas`]
//! - Text metrics: [`TextMeasurer`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
pub mod gesture;
mod geometry;
mod text;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{
    BoxStyle, ContentsGravity, DrawCommand, ImageRef, LinearGradient, Shadow, StrokeStyle,
};
pub use event::{Event, MouseButton, SwipeDirection, TouchId};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use gesture::{GestureConfig, SwipeRecognizer};
pub use text::{EstimatedTextMeasurer, TextMeasurer};
pub use widget::{Canvas, FontWeight, LayoutResult, TextAlign, TextStyle, TypeId, Widget};
