//! Text label

use super::Widget;
use crate::error::{self, UiError};
use crate::id::WidgetId;
use crate::layout::LayoutBox;
use crate::scene::Node;
use crate::shape::Color;
use crate::text::{TextMeasure, TextStyle};
use glam::{Vec2, Vec3};

/// Progress of text shaping for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapingState {
    /// Text changed since the last measurement; the size is stale.
    Pending,
    /// The size matches the current text and style.
    Ready,
    /// The last shaping attempt failed; the size is from before it.
    Failed,
}

/// A line (or lines) of text.
///
/// The size is zero until the text has been shaped once. Shaping either
/// happens synchronously through [`Label::shape_with`] or is driven by the
/// host through [`Label::finish_shaping`] / [`Label::fail_shaping`]. Parents
/// must relayout once the size lands.
#[derive(Debug, Clone)]
pub struct Label {
    id: WidgetId,
    node: Node,
    text: String,
    style: TextStyle,
    size: Vec2,
    opacity: f32,
    state: ShapingState,
    disposed: bool,
}

impl Label {
    pub fn new(id: WidgetId, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            id,
            node: Node::new(),
            text: text.into(),
            style,
            size: Vec2::ZERO,
            opacity: 1.0,
            state: ShapingState::Pending,
            disposed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn shaping_state(&self) -> ShapingState {
        self.state
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Change the text. The size becomes stale until shaped again.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.state = ShapingState::Pending;
        }
    }

    /// Change the style. Color-only changes keep the current size.
    pub fn set_style(&mut self, style: TextStyle) {
        let reshape = style.font_size != self.style.font_size
            || style.line_height != self.style.line_height;
        self.style = style;
        if reshape {
            self.state = ShapingState::Pending;
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    /// Text color with the opacity folded into alpha.
    pub fn effective_color(&self) -> Color {
        let [r, g, b, a] = self.style.color;
        [r, g, b, a * self.opacity]
    }

    /// Measure the text now.
    pub fn shape_with(&mut self, measure: &mut dyn TextMeasure) -> Vec2 {
        self.finish_shaping(measure.measure(&self.text, &self.style));
        self.size
    }

    /// Record the size reported by an asynchronous shaping pass.
    pub fn finish_shaping(&mut self, size: Vec2) {
        self.size = size;
        self.state = ShapingState::Ready;
    }

    /// Record a failed shaping pass. The previous size is kept.
    pub fn fail_shaping(&mut self, reason: impl Into<String>) {
        error::report(&UiError::TextShaping {
            text: self.text.clone(),
            reason: reason.into(),
        });
        self.state = ShapingState::Failed;
    }
}

impl LayoutBox for Label {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Label {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn shape_text(&mut self, measure: &mut dyn TextMeasure) {
        if self.state != ShapingState::Ready {
            self.shape_with(measure);
        }
    }

    fn labels(&self) -> Vec<&Label> {
        vec![self]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "label disposed twice");
            return;
        }
        self.disposed = true;
        self.node.visible = false;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMeasure;

    fn style() -> TextStyle {
        TextStyle::new().font_size(0.1).line_height(1.0)
    }

    #[test]
    fn test_size_zero_until_shaped() {
        let mut label = Label::new(WidgetId(0), "Play", style());
        assert_eq!(label.size(), Vec2::ZERO);
        assert_eq!(label.shaping_state(), ShapingState::Pending);

        let size = label.shape_with(&mut MonospaceMeasure { advance: 0.5 });
        assert!((size.x - 0.2).abs() < 1e-6);
        assert_eq!(label.shaping_state(), ShapingState::Ready);
    }

    #[test]
    fn test_set_text_marks_pending() {
        let mut label = Label::new(WidgetId(0), "Play", style());
        label.finish_shaping(Vec2::new(1.0, 0.1));

        label.set_text("Play");
        assert_eq!(label.shaping_state(), ShapingState::Ready);

        label.set_text("Pause");
        assert_eq!(label.shaping_state(), ShapingState::Pending);
        // stale until shaped again
        assert_eq!(label.size(), Vec2::new(1.0, 0.1));
    }

    #[test]
    fn test_color_change_keeps_size() {
        let mut label = Label::new(WidgetId(0), "Play", style());
        label.finish_shaping(Vec2::new(1.0, 0.1));
        label.set_style(style().color([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(label.shaping_state(), ShapingState::Ready);
        label.set_style(style().font_size(0.2));
        assert_eq!(label.shaping_state(), ShapingState::Pending);
    }

    #[test]
    fn test_failed_shaping_keeps_previous_size() {
        let mut label = Label::new(WidgetId(0), "Play", style());
        label.finish_shaping(Vec2::new(1.0, 0.1));
        label.set_text("Stop");
        label.fail_shaping("font missing");
        assert_eq!(label.shaping_state(), ShapingState::Failed);
        assert_eq!(label.size(), Vec2::new(1.0, 0.1));

        // a later shaping pass retries
        label.shape_text(&mut MonospaceMeasure::default());
        assert_eq!(label.shaping_state(), ShapingState::Ready);
    }

    #[test]
    fn test_opacity_folds_into_color() {
        let mut label = Label::new(WidgetId(0), "x", style());
        label.set_opacity(0.5);
        assert_eq!(label.effective_color()[3], 0.5);
    }
}
