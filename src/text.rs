//! Text measurement
//!
//! Labels need their extent before they can take part in layout. Shaping is
//! done by a [`TextMeasure`] implementation; with the `text` feature a
//! glyphon-backed one is available.

use crate::shape::Color;
use glam::Vec2;

/// Horizontal alignment of text inside its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Font size, color and alignment of a label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in scene units. Default: 0.05.
    pub font_size: f32,
    /// Line height as a multiple of the font size. Default: 1.25.
    pub line_height: f32,
    /// Text color. Default: white.
    pub color: Color,
    /// Alignment. Default: center.
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 0.05,
            line_height: 1.25,
            color: [1.0, 1.0, 1.0, 1.0],
            align: TextAlign::Center,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Absolute line height in scene units.
    pub fn line_height_abs(&self) -> f32 {
        self.font_size * self.line_height
    }
}

/// Measures laid out text.
pub trait TextMeasure {
    /// Extent of `text` rendered with `style`.
    fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2;
}

/// Fixed-advance estimate: every character is `advance` font sizes wide.
///
/// Useful before fonts are available and in tests.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    pub advance: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.lines() {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        Vec2::new(
            widest as f32 * self.advance * style.font_size,
            lines.max(1) as f32 * style.line_height_abs(),
        )
    }
}

#[cfg(feature = "text")]
pub use self::glyphon_measure::GlyphonMeasure;

#[cfg(feature = "text")]
mod glyphon_measure {
    use super::{TextMeasure, TextStyle};
    use glam::Vec2;
    use glyphon::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

    /// Text measurement using glyphon's shaping.
    pub struct GlyphonMeasure {
        font_system: FontSystem,
        buffer: Buffer,
    }

    impl GlyphonMeasure {
        /// Create a measurer using the system fonts.
        pub fn new() -> Self {
            Self::from_font_system(FontSystem::new())
        }

        /// Create a measurer from an existing font system.
        pub fn from_font_system(mut font_system: FontSystem) -> Self {
            let buffer = Buffer::new(&mut font_system, Metrics::new(14.0, 18.0));
            Self {
                font_system,
                buffer,
            }
        }
    }

    impl Default for GlyphonMeasure {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TextMeasure for GlyphonMeasure {
        fn measure(&mut self, text: &str, style: &TextStyle) -> Vec2 {
            let line_height = style.line_height_abs();
            self.buffer.set_metrics(
                &mut self.font_system,
                Metrics::new(style.font_size, line_height),
            );
            self.buffer.set_size(&mut self.font_system, None, None);
            self.buffer.set_text(
                &mut self.font_system,
                text,
                &Attrs::new().family(Family::SansSerif),
                Shaping::Advanced,
                None,
            );
            self.buffer.shape_until_scroll(&mut self.font_system, false);

            let mut width = 0.0f32;
            let mut lines = 0usize;
            for run in self.buffer.layout_runs() {
                width = width.max(run.line_w);
                lines += 1;
            }
            Vec2::new(width, lines as f32 * line_height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let mut measure = MonospaceMeasure { advance: 0.5 };
        let style = TextStyle::new().font_size(0.1).line_height(1.0);

        let size = measure.measure("abcd", &style);
        assert!((size.x - 0.2).abs() < 1e-6);
        assert!((size.y - 0.1).abs() < 1e-6);

        let size = measure.measure("ab\nabcdef", &style);
        assert!((size.x - 0.3).abs() < 1e-6);
        assert!((size.y - 0.2).abs() < 1e-6);

        assert_eq!(measure.measure("", &style), Vec2::ZERO);
    }

    #[test]
    fn test_style_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.align, TextAlign::Center);
        assert!((style.line_height_abs() - 0.0625).abs() < 1e-6);
    }
}
