//! Text measurement.

use crate::geometry::Size;
use std::fmt::Debug;

/// Measures the natural size of a single line of text.
///
/// Hosts with real font metrics implement this; widgets fall back to
/// [`EstimatedTextMeasurer`].
pub trait TextMeasurer: Send + Sync + Debug {
    /// Natural size of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// Character-count estimate: ~0.6 em per character, 1.2 line height.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedTextMeasurer {
    /// Advance per character, in em
    pub char_width: f32,
    /// Line height, in em
    pub line_height: f32,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            char_width: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        let chars = text.chars().count() as f32;
        Size::new(
            chars * font_size * self.char_width,
            font_size * self.line_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_scales_with_length_and_size() {
        let m = EstimatedTextMeasurer::default();
        let on = m.measure("ON", 10.0);
        assert!((on.width - 12.0).abs() < 1e-4);
        assert!((on.height - 12.0).abs() < 1e-4);

        let off = m.measure("OFF", 20.0);
        assert!((off.width - 36.0).abs() < 1e-4);
        assert!((off.height - 24.0).abs() < 1e-4);
    }

    #[test]
    fn test_estimate_empty_text_has_line_height() {
        let size = EstimatedTextMeasurer::default().measure("", 12.0);
        assert_eq!(size.width, 0.0);
        assert!(size.height > 0.0);
    }

    #[test]
    fn test_estimate_counts_chars_not_bytes() {
        let m = EstimatedTextMeasurer::default();
        assert_eq!(m.measure("ВКЛ", 10.0).width, m.measure("ONN", 10.0).width);
    }
}
