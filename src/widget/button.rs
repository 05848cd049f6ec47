//! Button

use super::{HitTarget, Label, Widget};
use crate::id::WidgetId;
use crate::layout::{LayoutBox, CHILD_DEPTH_OFFSET};
use crate::scene::Node;
use crate::shape::{Color, ShapeVisual};
use crate::text::{TextMeasure, TextStyle};
use glam::{Vec2, Vec3};

/// Visual state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Default,
    Hovered,
    Pressed,
    Disabled,
}

/// Background color for each state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub default: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub disabled: Color,
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self {
            default: [0.2, 0.2, 0.2, 1.0],
            hovered: [0.4, 0.4, 0.4, 1.0],
            pressed: [0.3, 0.3, 0.3, 1.0],
            disabled: [0.15, 0.15, 0.15, 0.6],
        }
    }
}

impl ButtonColors {
    pub fn for_state(&self, state: ButtonState) -> Color {
        match state {
            ButtonState::Default => self.default,
            ButtonState::Hovered => self.hovered,
            ButtonState::Pressed => self.pressed,
            ButtonState::Disabled => self.disabled,
        }
    }
}

/// Settings for creating a button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    /// Caption. Default: empty.
    pub text: String,
    /// Width. Default: 0.3.
    pub width: f32,
    /// Height. Default: 0.1.
    pub height: f32,
    /// Corner radius. Default: 0.02.
    pub corner_radius: f32,
    /// Background colors.
    pub colors: ButtonColors,
    /// Caption style.
    pub text_style: TextStyle,
    /// Start disabled. Default: false.
    pub disabled: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: 0.3,
            height: 0.1,
            corner_radius: 0.02,
            colors: ButtonColors::default(),
            text_style: TextStyle::default(),
            disabled: false,
        }
    }
}

impl ButtonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn colors(mut self, colors: ButtonColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Clickable rounded rectangle with a centered caption.
pub struct Button {
    id: WidgetId,
    node: Node,
    size: Vec2,
    background: ShapeVisual,
    label: Label,
    colors: ButtonColors,
    text_color: Color,
    hovered: bool,
    pressed: bool,
    disabled: bool,
    disposed: bool,
}

impl Button {
    pub fn new(id: WidgetId, config: ButtonConfig) -> Self {
        let background = ShapeVisual::rounded_rect(
            config.width,
            config.height,
            config.corner_radius,
            config.colors.default,
        );
        let mut label = Label::new(id, config.text, config.text_style);
        label.set_position(Vec3::new(0.0, 0.0, CHILD_DEPTH_OFFSET));

        let mut button = Self {
            id,
            node: Node::new(),
            size: Vec2::new(config.width, config.height),
            background,
            label,
            colors: config.colors,
            text_color: config.text_style.color,
            hovered: false,
            pressed: false,
            disabled: config.disabled,
            disposed: false,
        };
        button.refresh();
        button
    }

    /// Current state. Disabled wins over pressed, pressed over hovered.
    pub fn state(&self) -> ButtonState {
        if self.disabled {
            ButtonState::Disabled
        } else if self.pressed {
            ButtonState::Pressed
        } else if self.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Default
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn background(&self) -> &ShapeVisual {
        &self.background
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Pointer entered or left. Leaving cancels a press.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !hovered {
            self.pressed = false;
        }
        self.refresh();
    }

    /// Pointer pressed or released.
    ///
    /// Returns `true` when the release completes a click: the button was
    /// pressed, is still hovered and is enabled.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        if self.disabled {
            return false;
        }
        let clicked = !pressed && self.pressed && self.hovered;
        self.pressed = pressed;
        self.refresh();
        if clicked {
            tracing::debug!(id = %self.id, "button clicked");
        }
        clicked
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.pressed = false;
        }
        self.refresh();
    }

    /// Change the caption. Call [`Widget::shape_text`] afterwards.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    pub fn set_colors(&mut self, colors: ButtonColors) {
        self.colors = colors;
        self.refresh();
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.background.set_size(width, height);
    }

    fn refresh(&mut self) {
        let state = self.state();
        self.background.set_fill(self.colors.for_state(state));
        let mut text_color = self.text_color;
        if state == ButtonState::Disabled {
            text_color[3] *= 0.5;
        }
        self.label.set_color(text_color);
    }
}

impl LayoutBox for Button {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Button {
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
    }

    fn hit_targets(&self) -> Vec<HitTarget> {
        vec![HitTarget::new(self.id, Vec2::ZERO, self.size)]
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        vec![&self.background]
    }

    fn labels(&self) -> Vec<&Label> {
        vec![&self.label]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "button disposed twice");
            return;
        }
        self.disposed = true;
        self.background.dispose();
        self.label.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(WidgetId(1), ButtonConfig::new().text("OK"))
    }

    #[test]
    fn test_hover_and_press_colors() {
        let mut b = button();
        let colors = ButtonColors::default();
        assert_eq!(b.state(), ButtonState::Default);
        assert_eq!(b.background().fill(), colors.default);

        b.set_hovered(true);
        assert_eq!(b.state(), ButtonState::Hovered);
        assert_eq!(b.background().fill(), colors.hovered);

        b.set_pressed(true);
        assert_eq!(b.state(), ButtonState::Pressed);
        assert_eq!(b.background().fill(), colors.pressed);
    }

    #[test]
    fn test_release_while_hovered_clicks() {
        let mut b = button();
        b.set_hovered(true);
        assert!(!b.set_pressed(true));
        assert!(b.set_pressed(false));
        assert_eq!(b.state(), ButtonState::Hovered);

        // release without a press is not a click
        assert!(!b.set_pressed(false));
    }

    #[test]
    fn test_leaving_cancels_press() {
        let mut b = button();
        b.set_hovered(true);
        b.set_pressed(true);
        b.set_hovered(false);
        assert_eq!(b.state(), ButtonState::Default);
        assert!(!b.set_pressed(false));
    }

    #[test]
    fn test_disabled_wins() {
        let mut b = button();
        b.set_hovered(true);
        b.set_disabled(true);
        assert_eq!(b.state(), ButtonState::Disabled);
        assert!(!b.set_pressed(true));
        assert!(!b.set_pressed(false));
        assert!(b.label().style().color[3] < 1.0);

        b.set_disabled(false);
        assert_eq!(b.state(), ButtonState::Hovered);
        assert_eq!(b.label().style().color[3], 1.0);
    }

    #[test]
    fn test_resize_updates_background() {
        let mut b = button();
        b.set_size(0.5, 0.2);
        assert_eq!(b.size(), Vec2::new(0.5, 0.2));
        assert_eq!(b.background().size(), Vec2::new(0.5, 0.2));
        assert_eq!(b.hit_targets()[0].size, Vec2::new(0.5, 0.2));
    }
}
