//! Progress bar

use super::Widget;
use crate::id::WidgetId;
use crate::layout::{LayoutBox, CHILD_DEPTH_OFFSET};
use crate::scene::Node;
use crate::shape::{Color, ShapeVisual, MIN_EXTENT};
use glam::{Vec2, Vec3};

/// Settings for creating a progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarConfig {
    /// Width. Default: 0.3.
    pub width: f32,
    /// Height. Default: 0.02.
    pub height: f32,
    /// Initial value in `[0, 1]`. Default: 0.
    pub value: f32,
    pub track_color: Color,
    pub fill_color: Color,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            width: 0.3,
            height: 0.02,
            value: 0.0,
            track_color: [0.2, 0.2, 0.2, 1.0],
            fill_color: [0.3, 0.8, 0.4, 1.0],
        }
    }
}

impl ProgressBarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }
}

/// Track with a left-aligned fill proportional to the value.
pub struct ProgressBar {
    id: WidgetId,
    node: Node,
    size: Vec2,
    value: f32,
    track: ShapeVisual,
    fill: ShapeVisual,
    disposed: bool,
}

impl ProgressBar {
    pub fn new(id: WidgetId, config: ProgressBarConfig) -> Self {
        let mut bar = Self {
            id,
            node: Node::new(),
            size: Vec2::new(config.width, config.height),
            value: 0.0,
            track: ShapeVisual::pill(config.width, config.height, config.track_color),
            fill: ShapeVisual::pill(config.width, config.height, config.fill_color),
            disposed: false,
        };
        bar.set_value(config.value);
        bar
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn track(&self) -> &ShapeVisual {
        &self.track
    }

    pub fn fill(&self) -> &ShapeVisual {
        &self.fill
    }

    /// Set the value, clamped to `[0, 1]`.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
        self.apply_value();
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill.set_fill(color);
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.track.set_size(width, height);
        self.apply_value();
    }

    fn apply_value(&mut self) {
        let fill_width = (self.value * self.size.x).max(MIN_EXTENT);
        self.fill.set_size(fill_width, self.size.y);
        self.fill.set_position(Vec3::new(
            -self.size.x / 2.0 + fill_width / 2.0,
            0.0,
            CHILD_DEPTH_OFFSET,
        ));
        self.fill.set_visible(self.value > 0.0);
    }
}

impl LayoutBox for ProgressBar {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for ProgressBar {
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

    fn visuals(&self) -> Vec<&ShapeVisual> {
        vec![&self.track, &self.fill]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "progress bar disposed twice");
            return;
        }
        self.disposed = true;
        self.track.dispose();
        self.fill.dispose();
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(value: f32) -> ProgressBar {
        ProgressBar::new(WidgetId(0), ProgressBarConfig::new().size(2.0, 0.1).value(value))
    }

    #[test]
    fn test_fill_is_left_aligned() {
        let b = bar(0.25);
        assert_eq!(b.fill().size(), Vec2::new(0.5, 0.1));
        assert_eq!(b.fill().position().x, -0.75);
        assert!(b.fill().is_visible());
    }

    #[test]
    fn test_value_clamped() {
        let mut b = bar(1.5);
        assert_eq!(b.value(), 1.0);
        assert_eq!(b.fill().size().x, 2.0);
        b.set_value(-1.0);
        assert_eq!(b.value(), 0.0);
    }

    #[test]
    fn test_zero_hides_min_fill() {
        let b = bar(0.0);
        assert_eq!(b.fill().size().x, MIN_EXTENT);
        assert!(!b.fill().is_visible());
    }

    #[test]
    fn test_resize_keeps_ratio() {
        let mut b = bar(0.5);
        b.set_size(4.0, 0.2);
        assert_eq!(b.track().size(), Vec2::new(4.0, 0.2));
        assert_eq!(b.fill().size(), Vec2::new(2.0, 0.2));
        assert_eq!(b.fill().position().x, -1.0);
    }
}
