//! Tooltip

use super::{Label, Widget};
use crate::id::WidgetId;
use crate::layout::{BackgroundConfig, LayoutBox, Padding, CHILD_DEPTH_OFFSET};
use crate::scene::Node;
use crate::shape::ShapeVisual;
use crate::text::{TextMeasure, TextStyle};
use glam::{Vec2, Vec3};

/// Settings for creating a tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipConfig {
    pub text: String,
    pub text_style: TextStyle,
    /// Space around the text. Default: 0.01 vertical, 0.02 horizontal.
    pub padding: Padding,
    /// Seconds between [`Tooltip::show`] and the tooltip appearing. Default: 0.5.
    pub delay: f32,
    pub background: BackgroundConfig,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            text_style: TextStyle::default().font_size(0.035),
            padding: Padding::symmetric(0.01, 0.02),
            delay: 0.5,
            background: BackgroundConfig::default().color([0.05, 0.05, 0.05, 0.95]),
        }
    }
}

impl TooltipConfig {
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

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// Text on a background sized to fit it, shown after a hover delay.
pub struct Tooltip {
    id: WidgetId,
    node: Node,
    size: Vec2,
    padding: Padding,
    delay: f32,
    pending: Option<f32>,
    background: ShapeVisual,
    label: Label,
    disposed: bool,
}

impl Tooltip {
    pub fn new(id: WidgetId, config: TooltipConfig) -> Self {
        let mut tooltip = Self {
            id,
            node: Node {
                position: Vec3::ZERO,
                visible: false,
            },
            size: Vec2::ZERO,
            padding: config.padding,
            delay: config.delay,
            pending: None,
            background: config.background.build(Vec2::ZERO),
            label: Label::new(id, config.text, config.text_style),
            disposed: false,
        };
        tooltip.fit();
        tooltip
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn background(&self) -> &ShapeVisual {
        &self.background
    }

    /// Whether a show request is waiting for its delay.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start the show delay. Has no effect while already shown or pending.
    pub fn show(&mut self) {
        if !self.node.visible && self.pending.is_none() {
            self.pending = Some(0.0);
        }
    }

    /// Show without waiting.
    pub fn show_now(&mut self) {
        self.pending = None;
        self.node.visible = true;
    }

    /// Hide at once and cancel a pending show.
    pub fn hide(&mut self) {
        self.pending = None;
        self.node.visible = false;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    /// Size the background around the label.
    fn fit(&mut self) {
        let text = self.label.size();
        self.size = Vec2::new(
            text.x + self.padding.horizontal(),
            text.y + self.padding.vertical(),
        );
        self.background.set_size(self.size.x, self.size.y);
        // Uneven padding shifts the text off center.
        self.label.set_position(Vec3::new(
            (self.padding.left - self.padding.right) / 2.0,
            (self.padding.bottom - self.padding.top) / 2.0,
            CHILD_DEPTH_OFFSET,
        ));
    }
}

impl LayoutBox for Tooltip {
    fn layout_size(&self) -> Vec2 {
        self.size
    }

    fn set_layout_position(&mut self, position: Vec3) {
        self.node.position = position;
    }
}

impl Widget for Tooltip {
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

    fn update(&mut self, dt: f32) {
        if let Some(elapsed) = self.pending {
            let elapsed = elapsed + dt;
            if elapsed >= self.delay {
                self.show_now();
            } else {
                self.pending = Some(elapsed);
            }
        }
    }

    fn shape_text(&mut self, measure: &mut dyn TextMeasure) {
        self.label.shape_text(measure);
        self.fit();
    }

    fn visuals(&self) -> Vec<&ShapeVisual> {
        vec![&self.background]
    }

    fn labels(&self) -> Vec<&Label> {
        vec![&self.label]
    }

    fn dispose(&mut self) {
        if self.disposed {
            tracing::warn!(id = %self.id, "tooltip disposed twice");
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
    use crate::text::MonospaceMeasure;

    #[test]
    fn test_shows_after_delay() {
        let mut tip = Tooltip::new(WidgetId(0), TooltipConfig::new().text("Save").delay(0.5));
        assert!(!tip.is_visible());

        tip.show();
        tip.update(0.25);
        assert!(!tip.is_visible());
        assert!(tip.is_pending());

        tip.update(0.25);
        assert!(tip.is_visible());
        assert!(!tip.is_pending());
    }

    #[test]
    fn test_hide_cancels_pending() {
        let mut tip = Tooltip::new(WidgetId(0), TooltipConfig::new().delay(0.5));
        tip.show();
        tip.update(0.4);
        tip.hide();
        tip.update(0.4);
        assert!(!tip.is_visible());

        // a new show restarts the delay
        tip.show();
        tip.update(0.4);
        assert!(!tip.is_visible());
    }

    #[test]
    fn test_background_fits_text() {
        let style = TextStyle::new().font_size(0.1).line_height(1.0);
        let mut tip = Tooltip::new(
            WidgetId(0),
            TooltipConfig::new()
                .text("abcd")
                .text_style(style)
                .padding([0.0, 0.1, 0.0, 0.3]),
        );
        tip.shape_text(&mut MonospaceMeasure { advance: 0.5 });

        assert!((tip.size().x - 0.6).abs() < 1e-6);
        assert!((tip.size().y - 0.1).abs() < 1e-6);
        assert_eq!(tip.background().size(), tip.size());
        assert!((tip.label().position().x - 0.1).abs() < 1e-6);
    }
}
