//! Floating text
//!
//! Short-lived text that drifts upward and fades out, e.g. damage numbers or
//! "+1" pickups.

use super::{Label, Widget};
use crate::id::WidgetId;
use crate::layout::LayoutBox;
use crate::scene::Node;
use crate::text::{TextMeasure, TextStyle};
use glam::{Vec2, Vec3};

/// Settings for creating floating text.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingTextConfig {
    pub text: String,
    pub text_style: TextStyle,
    /// Upward speed in units per second. Default: 0.1.
    pub rise_speed: f32,
    /// Seconds until fully faded. Default: 1.
    pub lifetime: f32,
}

impl Default for FloatingTextConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_style: TextStyle::default(),
            rise_speed: 0.1,
            lifetime: 1.0,
        }
    }
}

impl FloatingTextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    pub fn rise_speed(mut self, speed: f32) -> Self {
        self.rise_speed = speed;
        self
    }

    pub fn lifetime(mut self, lifetime: f32) -> Self {
        self.lifetime = lifetime;
        self
    }
}

pub struct FloatingText {
    id: WidgetId,
    node: Node,
    label: Label,
    rise_speed: f32,
    lifetime: f32,
    age: f32,
    disposed: bool,
}

impl FloatingText {
    pub fn new(id: WidgetId, config: FloatingTextConfig) -> Self {
        let mut text = Self {
            id,
            node: Node::new(),
            label: Label::new(id, config.text, config.text_style),
            rise_speed: config.rise_speed,
            lifetime: config.lifetime,
            age: 0.0,
            disposed: false,
        };
        // No lifetime: finished before the first update.
        if text.is_finished() {
            text.label.set_opacity(0.0);
            text.node.visible = false;
        }
        text
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn opacity(&self) -> f32 {
        self.label.opacity()
    }

    /// Whether the lifetime has elapsed. The host may then dispose it.
    pub fn is_finished(&self) -> bool {
        self.age >= self.lifetime
    }
}

impl LayoutBox for FloatingText {
    fn layout_size(&self) -> Vec2 {
        self.label.size()
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for FloatingText {
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
        self.label.size()
    }

    fn update(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }
        let step = dt.min(self.lifetime - self.age);
        self.age += step;
        self.node.position.y += self.rise_speed * step;

        self.label.set_opacity(1.0 - self.age / self.lifetime);
        if self.is_finished() {
            self.node.visible = false;
        }
    }

    fn shape_text(&mut self, measure: &mut dyn TextMeasure) {
        self.label.shape_text(measure);
    }

    fn labels(&self) -> Vec<&Label> {
        vec![&self.label]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "floating text disposed twice");
            return;
        }
        self.disposed = true;
        self.label.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floating() -> FloatingText {
        FloatingText::new(
            WidgetId(0),
            FloatingTextConfig::new().text("+1").rise_speed(0.5).lifetime(2.0),
        )
    }

    #[test]
    fn test_rises_and_fades() {
        let mut text = floating();
        text.update(0.5);
        assert!((text.position().y - 0.25).abs() < 1e-6);
        assert!((text.opacity() - 0.75).abs() < 1e-6);
        assert!(!text.is_finished());
    }

    #[test]
    fn test_finishes_after_lifetime() {
        let mut text = floating();
        text.update(1.5);
        text.update(1.5);
        assert!(text.is_finished());
        assert_eq!(text.opacity(), 0.0);
        assert!(!text.is_visible());
        // rise stops at the end of the lifetime
        assert!((text.position().y - 1.0).abs() < 1e-6);

        text.update(1.0);
        assert!((text.position().y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_lifetime_starts_finished() {
        let mut text = FloatingText::new(
            WidgetId(0),
            FloatingTextConfig::new().text("+1").lifetime(0.0),
        );
        assert!(text.is_finished());
        assert_eq!(text.opacity(), 0.0);
        assert!(!text.is_visible());

        text.update(0.5);
        assert_eq!(text.position().y, 0.0);
        assert!(!text.is_visible());
    }
}
