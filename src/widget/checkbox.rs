//! Checkbox

use super::{HitTarget, Label, Widget};
use crate::id::WidgetId;
use crate::layout::{LayoutBox, CHILD_DEPTH_OFFSET};
use crate::scene::Node;
use crate::shape::{Color, ShapeVisual};
use crate::text::{TextMeasure, TextStyle};
use glam::{Vec2, Vec3};

/// Settings for creating a checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxConfig {
    /// Text right of the box. Default: empty.
    pub text: String,
    /// Side length of the box. Default: 0.06.
    pub box_size: f32,
    /// Space between box and text. Default: 0.02.
    pub spacing: f32,
    /// Initial value. Default: false.
    pub checked: bool,
    /// Box color. Default: dark grey.
    pub box_color: Color,
    /// Box color under the pointer. Default: light grey.
    pub hover_color: Color,
    /// Check mark color. Default: near white.
    pub check_color: Color,
    pub text_style: TextStyle,
}

impl Default for CheckboxConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            box_size: 0.06,
            spacing: 0.02,
            checked: false,
            box_color: [0.2, 0.2, 0.2, 1.0],
            hover_color: [0.4, 0.4, 0.4, 1.0],
            check_color: [0.8, 0.8, 0.8, 1.0],
            text_style: TextStyle::default(),
        }
    }
}

impl CheckboxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn box_size(mut self, size: f32) -> Self {
        self.box_size = size;
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }
}

/// Box with a check mark and a caption.
pub struct Checkbox {
    id: WidgetId,
    node: Node,
    size: Vec2,
    box_size: f32,
    spacing: f32,
    frame: ShapeVisual,
    mark: ShapeVisual,
    label: Label,
    box_color: Color,
    hover_color: Color,
    checked: bool,
    hovered: bool,
    disabled: bool,
    disposed: bool,
}

impl Checkbox {
    pub fn new(id: WidgetId, config: CheckboxConfig) -> Self {
        let frame = ShapeVisual::rounded_rect(
            config.box_size,
            config.box_size,
            config.box_size * 0.2,
            config.box_color,
        );
        let inner = config.box_size * 0.6;
        let mark = ShapeVisual::rounded_rect(inner, inner, inner * 0.2, config.check_color);

        let mut checkbox = Self {
            id,
            node: Node::new(),
            size: Vec2::ZERO,
            box_size: config.box_size,
            spacing: config.spacing,
            frame,
            mark,
            label: Label::new(id, config.text, config.text_style),
            box_color: config.box_color,
            hover_color: config.hover_color,
            checked: config.checked,
            hovered: false,
            disabled: false,
            disposed: false,
        };
        checkbox.arrange_parts();
        checkbox.refresh();
        checkbox
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn frame(&self) -> &ShapeVisual {
        &self.frame
    }

    pub fn mark(&self) -> &ShapeVisual {
        &self.mark
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Flip the value unless disabled. Returns the value afterwards.
    pub fn toggle(&mut self) -> bool {
        if !self.disabled {
            self.checked = !self.checked;
            tracing::debug!(id = %self.id, checked = self.checked, "checkbox toggled");
            self.refresh();
        }
        self.checked
    }

    /// Force the value, even while disabled.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.refresh();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.refresh();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.refresh();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    fn refresh(&mut self) {
        let color = if self.hovered && !self.disabled {
            self.hover_color
        } else {
            self.box_color
        };
        self.frame.set_fill(color);
        self.frame.set_opacity(if self.disabled { 0.5 } else { 1.0 });
        self.mark.set_visible(self.checked);
    }

    /// Lay the box and caption out left to right, centered on the origin.
    fn arrange_parts(&mut self) {
        let label_size = self.label.size();
        let text_width = if label_size.x > 0.0 {
            self.spacing + label_size.x
        } else {
            0.0
        };
        self.size = Vec2::new(self.box_size + text_width, self.box_size.max(label_size.y));

        let left = -self.size.x / 2.0;
        let box_x = left + self.box_size / 2.0;
        self.frame.set_position(Vec3::new(box_x, 0.0, 0.0));
        self.mark.set_position(Vec3::new(box_x, 0.0, CHILD_DEPTH_OFFSET));
        self.label.set_position(Vec3::new(
            left + self.box_size + self.spacing + label_size.x / 2.0,
            0.0,
            CHILD_DEPTH_OFFSET,
        ));
    }
}

impl LayoutBox for Checkbox {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Checkbox {
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
        self.label.shape_text(measure);
        self.arrange_parts();
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        vec![HitTarget::new(self.id, Vec2::ZERO, self.size)]
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        vec![&self.frame, &self.mark]
    }

    fn labels(&self) -> Vec<&Label> {
        vec![&self.label]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "checkbox disposed twice");
            return;
        }
        self.disposed = true;
        self.frame.dispose();
        self.mark.dispose();
        self.label.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::MonospaceMeasure;

    #[test]
    fn test_toggle_shows_mark() {
        let mut checkbox = Checkbox::new(WidgetId(0), CheckboxConfig::new());
        assert!(!checkbox.mark().is_visible());
        assert!(checkbox.toggle());
        assert!(checkbox.mark().is_visible());
        assert!(!checkbox.toggle());
        assert!(!checkbox.mark().is_visible());
    }

    #[test]
    fn test_disabled_ignores_toggle() {
        let mut checkbox = Checkbox::new(WidgetId(0), CheckboxConfig::new().checked(true));
        checkbox.set_disabled(true);
        assert!(checkbox.toggle());
        assert_eq!(checkbox.frame().opacity(), 0.5);

        checkbox.set_checked(false);
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn test_hover_color() {
        let config = CheckboxConfig::new();
        let mut checkbox = Checkbox::new(WidgetId(0), config.clone());
        checkbox.set_hovered(true);
        assert_eq!(checkbox.frame().fill(), config.hover_color);
        checkbox.set_disabled(true);
        assert_eq!(checkbox.frame().fill(), config.box_color);
    }

    #[test]
    fn test_caption_placed_right_of_box() {
        let style = TextStyle::new().font_size(0.1).line_height(1.0);
        let mut checkbox = Checkbox::new(
            WidgetId(0),
            CheckboxConfig::new()
                .text("abcd")
                .box_size(0.1)
                .spacing(0.05)
                .text_style(style),
        );
        assert_eq!(checkbox.size(), Vec2::new(0.1, 0.1));

        checkbox.shape_text(&mut MonospaceMeasure { advance: 0.5 });
        // 0.1 box + 0.05 spacing + 0.2 text
        assert!((checkbox.size().x - 0.35).abs() < 1e-6);
        assert!((checkbox.frame().position().x - (-0.175 + 0.05)).abs() < 1e-6);
        assert!((checkbox.label().position().x - (0.175 - 0.1)).abs() < 1e-6);
    }
}
