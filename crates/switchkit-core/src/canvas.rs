//! Canvas implementations for rendering.

use crate::draw::{BoxStyle, ContentsGravity, DrawCommand, ImageRef, LinearGradient};
use crate::widget::{Canvas, TextStyle};
use crate::{CornerRadius, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (send commands to a host renderer)
///
/// Clip regions are tracked, and each recorded command remembers the clip
/// that was active when it was drawn.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clips: Vec<Option<Rect>>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clip that was active for the command at `index`.
    #[must_use]
    pub fn clip_for(&self, index: usize) -> Option<Rect> {
        self.clips.get(index).copied().flatten()
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.clips.clear();
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clips.clear();
        self.clip_stack.clear();
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Add a raw draw command.
    pub fn add_command(&mut self, command: DrawCommand) {
        self.clips.push(self.current_clip());
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn draw_box(&mut self, rect: Rect, radius: CornerRadius, style: &BoxStyle) {
        self.add_command(DrawCommand::Rect {
            bounds: rect,
            radius,
            style: style.clone(),
        });
    }

    fn fill_gradient(&mut self, rect: Rect, radius: CornerRadius, gradient: &LinearGradient) {
        self.add_command(DrawCommand::Gradient {
            bounds: rect,
            radius,
            gradient: *gradient,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.add_command(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, image: &ImageRef, rect: Rect, gravity: ContentsGravity) {
        self.add_command(DrawCommand::Image {
            image: image.clone(),
            bounds: rect,
            gravity,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}
